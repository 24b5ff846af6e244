/// Quickstart example - infer a few values, then stream a small CSV to stdout
use ingot::{convert_reader, infer, ConvertConfig};

fn main() -> anyhow::Result<()> {
    println!("=== Ingot Quick Start ===\n");

    // Step 1: How single values are typed
    for raw in ["42", "+5", "3.14", "1e-5", "Yes", "NO", "none", "", "  hello  "] {
        println!("{:>12} -> {:?}", format!("{raw:?}"), infer(raw));
    }

    // Step 2: Some CSV
    let csv = "\
id,name,score,active,manager
1,Alice,9.5,yes,null
2,Bob,7,no,1
3,Zoë,,true,1
";

    // Step 3: Pretty output (indent 4)
    println!("\nIndented:");
    let mut out = Vec::new();
    let count = convert_reader(csv.as_bytes(), &mut out, &ConvertConfig::default())?;
    println!("{}", String::from_utf8(out)?);

    // Step 4: Compact output (indent 0)
    println!("\nCompact:");
    let mut out = Vec::new();
    convert_reader(csv.as_bytes(), &mut out, &ConvertConfig::default().with_indent(0))?;
    println!("{}", String::from_utf8(out)?);

    println!("\n✓ Converted {} records", count);

    Ok(())
}

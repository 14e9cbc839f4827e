use o2ox_core::{Analysis, SetterMatch};

/// One `setter ← field` line per match, setters padded to a common width
pub fn format_matches(matches: &[SetterMatch], null_label: &str) -> Vec<String> {
    let width = matches.iter().map(|m| m.setter.len()).max().unwrap_or(0);
    matches
        .iter()
        .map(|m| {
            let field = m.field.as_deref().unwrap_or(null_label);
            format!("{:<width$}  ← {}", m.setter, field)
        })
        .collect()
}

/// `null_label` is what unmatched setters receive in the snippet
pub fn print_analysis(analysis: &Analysis, location: &str, indexed: usize, null_label: &str) {
    let generated = &analysis.generated;

    println!("🔍 Analyzing: {location}");
    println!("{}", "=".repeat(80));
    println!("📍 Method: {}", analysis.context.method_name);
    println!("🎯 Target: {}", analysis.context.target);
    println!("📦 Source: {}", analysis.context.source);
    println!("🔧 Mode: {}", generated.mode);
    println!("📚 Indexed declarations: {indexed}");

    println!(
        "\n🔗 Setters ({}/{} matched):",
        generated.matched_count(),
        generated.matches.len()
    );
    if generated.matches.is_empty() {
        println!("   (none)");
    }
    for line in format_matches(&generated.matches, null_label) {
        println!("   {line}");
    }

    println!("\n📝 Snippet:");
    for line in generated.text.lines() {
        println!("   {line}");
    }
}

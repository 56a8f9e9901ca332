fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Non-interactive smoke mode (for automated checks).
    // Renders a single frame for a specific wizard tab and exits 0.
    // Usage: --smoke or --smoke=replica|conversation|video
    if let Some(arg) = args
        .iter()
        .find(|a| a.as_str() == "--smoke" || a.starts_with("--smoke="))
    {
        let target = arg
            .split_once('=')
            .map(|(_, v)| v.to_string())
            .filter(|v| !v.trim().is_empty());
        tavus_wizard::run_smoke(target);
        return;
    }

    tavus_wizard::run();
}

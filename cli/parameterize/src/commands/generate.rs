//! `parameterize HWCONFIG TEMPLATE:OUTFILE`: render one template.

use std::path::Path;

use anyhow::{Context, Result};
use parameterize_hwconfig::{has_expected_extension, HwConfig};
use parameterize_render::{Generator, RenderOutcome, TemplateSpec};

/// Load `config_path`, render the `TEMPLATE:OUTFILE` pair in `spec`, and
/// report a template failure on stdout.
///
/// Template failures are not errors: the trace is printed and the outcome
/// returned. Everything else (bad spec, unreadable or incomplete config,
/// unreadable template, unwritable output) is.
pub fn run(config_path: &Path, spec: &str, base_dir: &Path) -> Result<RenderOutcome> {
    if !has_expected_extension(config_path) {
        println!(
            "hw config file {} doesn't end with .yml - is this a mistake?",
            config_path.display()
        );
    }

    let spec: TemplateSpec = spec.parse()?;
    let config = HwConfig::load(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    log::info!(
        "rendering {} from {} into {}",
        base_dir.join(&spec.template).display(),
        config_path.display(),
        spec.output.display()
    );

    let mut generator = Generator::new(base_dir);
    let outcome = generator
        .run(&config, &spec)
        .with_context(|| format!("generating {spec}"))?;

    if let RenderOutcome::Failed { trace } = &outcome {
        println!("{trace}");
    }
    Ok(outcome)
}

//! parameterize: render a driver template from a YAML hardware configuration.

mod commands;

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process;

use clap::error::ErrorKind;
use clap::Parser;

/// Templates are looked up relative to the working directory.
const BASE_DIR: &str = ".";

const USAGE: &str = "\
USAGE: parameterize HWCONFIG TEMPLATE:OUTFILE
  HWCONFIG is the path to a YAML hardware configuration file
  TEMPLATE is the template file, relative to the working directory
  OUTFILE is the result file to be generated";

#[derive(Parser, Debug)]
#[command(
    name = "parameterize",
    version,
    about = "Render a driver template from a YAML hardware configuration",
    override_usage = "parameterize HWCONFIG TEMPLATE:OUTFILE"
)]
struct Cli {
    /// Path to a YAML hardware configuration file
    #[arg(value_name = "HWCONFIG")]
    config: PathBuf,
    /// Template file and the result file to generate
    #[arg(value_name = "TEMPLATE:OUTFILE")]
    spec: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Some(cli) = parse_args(std::env::args_os()) else {
        return;
    };

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Parse the command line. On a wrong argument count (or any other argument
/// error) the usage text is printed and `None` returned; the process then
/// exits normally.
fn parse_args<I, T>(args: I) -> Option<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Some(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            log::debug!("argument error: {e}");
            println!("{USAGE}");
            None
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    commands::generate::run(&cli.config, &cli.spec, Path::new(BASE_DIR))?;
    Ok(())
}

#[cfg(test)]
mod integration_tests {
    use std::fs;

    use parameterize_render::RenderOutcome;

    use super::*;

    const HW_CONFIG: &str = r#"
board: zedboard
instreams:
  rx0:
    irq: 5
    dma_addr: "0x1000"
outstreams:
  tx0:
    irq: 6
    dma_addr: "0x2000"
"#;

    const TEMPLATE: &str = "\
/* generated by {{ toolName }} for {{ board }} */
static const int irqs[] = { {% for irq in irqlist %}{{ irq }}, {% endfor %}};
{% for s in streams %}{{ s.name }}: {{ s.type }} @ {{ s.dma_addr | hex(width=8) }}
{% endfor %}";

    const EXPECTED: &str = "\
/* generated by parameterize for zedboard */
static const int irqs[] = { 5, 6, };
rx0: input @ 0x00001000
tx0: output @ 0x00002000
";

    struct Workspace {
        dir: tempfile::TempDir,
    }

    impl Workspace {
        fn new(config: &str, template: &str) -> Self {
            let dir = tempfile::tempdir().unwrap();
            fs::write(dir.path().join("hw.yml"), config).unwrap();
            fs::write(dir.path().join("driver.c.tera"), template).unwrap();
            Self { dir }
        }

        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        fn spec(&self) -> String {
            format!("driver.c.tera:{}", self.path("driver.c").display())
        }

        fn run(&self, config: &str) -> anyhow::Result<RenderOutcome> {
            commands::generate::run(&self.path(config), &self.spec(), self.dir.path())
        }
    }

    #[test]
    fn renders_template_end_to_end() {
        let ws = Workspace::new(HW_CONFIG, TEMPLATE);
        let outcome = ws.run("hw.yml").unwrap();
        assert!(outcome.is_written());
        assert_eq!(fs::read_to_string(ws.path("driver.c")).unwrap(), EXPECTED);
    }

    #[test]
    fn rerun_produces_identical_output() {
        let ws = Workspace::new(HW_CONFIG, TEMPLATE);
        ws.run("hw.yml").unwrap();
        let first = fs::read(ws.path("driver.c")).unwrap();
        ws.run("hw.yml").unwrap();
        assert_eq!(fs::read(ws.path("driver.c")).unwrap(), first);
    }

    #[test]
    fn anchored_defaults_are_merged() {
        let config = r#"
board: zedboard
dma_defaults: &dma { irq: 5, dma_addr: 0x1000 }
instreams:
  rx0: { <<: *dma }
outstreams:
  tx0: { <<: *dma, irq: 6, dma_addr: 0x2000 }
"#;
        let ws = Workspace::new(config, TEMPLATE);
        assert!(ws.run("hw.yml").unwrap().is_written());
        assert_eq!(fs::read_to_string(ws.path("driver.c")).unwrap(), EXPECTED);
    }

    #[test]
    fn unexpected_extension_only_warns() {
        let ws = Workspace::new(HW_CONFIG, TEMPLATE);
        fs::copy(ws.path("hw.yml"), ws.path("hw.conf")).unwrap();
        let outcome = ws.run("hw.conf").unwrap();
        assert!(outcome.is_written());
    }

    #[test]
    fn missing_instreams_fails_before_output() {
        let ws = Workspace::new("outstreams: {}\n", TEMPLATE);
        let err = ws.run("hw.yml").unwrap_err();
        assert!(format!("{err:#}").contains("instreams"));
        assert!(!ws.path("driver.c").exists());
    }

    #[test]
    fn malformed_config_is_fatal() {
        let ws = Workspace::new("instreams: [unclosed", TEMPLATE);
        let err = ws.run("hw.yml").unwrap_err();
        assert!(format!("{err:#}").contains("hw.yml"));
        assert!(!ws.path("driver.c").exists());
    }

    #[test]
    fn missing_config_is_fatal() {
        let ws = Workspace::new(HW_CONFIG, TEMPLATE);
        let err = ws.run("absent.yml").unwrap_err();
        assert!(format!("{err:#}").contains("absent.yml"));
    }

    #[test]
    fn malformed_spec_is_fatal() {
        let ws = Workspace::new(HW_CONFIG, TEMPLATE);
        let err = commands::generate::run(&ws.path("hw.yml"), "driver.c.tera", ws.dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("TEMPLATE:OUTFILE"));
    }

    #[test]
    fn template_error_is_reported_not_fatal() {
        let ws = Workspace::new(HW_CONFIG, "{{ missing_parameter }}");
        fs::write(ws.path("driver.c"), "previous").unwrap();
        let outcome = ws.run("hw.yml").unwrap();
        match outcome {
            RenderOutcome::Failed { trace } => assert!(trace.contains("missing_parameter")),
            other => panic!("expected a reported failure, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(ws.path("driver.c")).unwrap(), "previous");
    }

    #[test]
    fn wrong_argument_count_prints_usage() {
        assert!(parse_args(["parameterize"]).is_none());
        assert!(parse_args(["parameterize", "hw.yml"]).is_none());
        assert!(parse_args(["parameterize", "hw.yml", "a:b", "extra"]).is_none());
    }

    #[test]
    fn two_arguments_parse() {
        let cli = parse_args(["parameterize", "hw.yml", "driver.c.tera:driver.c"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("hw.yml"));
        assert_eq!(cli.spec, "driver.c.tera:driver.c");
    }

    #[test]
    fn namespace_matches_documented_example() {
        let config = parameterize_hwconfig::HwConfig::parse(HW_CONFIG).unwrap();
        let ns = parameterize_render::Generator::new(BASE_DIR)
            .namespace(&config)
            .unwrap();
        assert_eq!(ns.get("streamNames"), Some(&serde_json::json!(["rx0", "tx0"])));
        assert_eq!(ns.get("irqlist"), Some(&serde_json::json!([5, 6])));
    }
}

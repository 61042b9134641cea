use std::fs;
use std::path::PathBuf;

use sheet_bars::api::{StyleConfigText, StyleField};
use sheet_bars::telemetry::init_default_tracing;
use sheet_bars::{ChartPipeline, PipelineLogger, PngChartSink, StyleConfig, TracingLogger};

#[derive(Debug)]
struct CliArgs {
    workbook_path: PathBuf,
    output_dir: PathBuf,
    style_text: StyleConfigText,
    style_file: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let logger = TracingLogger;
    let style = resolve_style(&args, &logger);
    let mut pipeline = ChartPipeline::new(PngChartSink, logger);
    if pipeline.run_workbook(&args.workbook_path, &args.output_dir, &style) {
        println!("charts written to {}", args.output_dir.display());
    } else {
        eprintln!("operation failed, check logs");
        std::process::exit(1);
    }
}

/// Command-line fields, optionally layered over a JSON style file. Invalid
/// fields keep the underlying value and are logged.
fn resolve_style(args: &CliArgs, logger: &TracingLogger) -> StyleConfig {
    let Some(path) = &args.style_file else {
        let (style, issues) = args.style_text.parse_lenient();
        for issue in &issues {
            logger.error(&issue.to_string());
        }
        return style;
    };

    let mut style = match fs::read_to_string(path)
        .map_err(|err| format!("failed to read style `{}`: {err}", path.display()))
        .and_then(|raw| StyleConfig::from_json_str(&raw).map_err(|err| err.to_string()))
    {
        Ok(style) => style,
        Err(err) => {
            logger.error(&err);
            StyleConfig::default()
        }
    };

    for field in StyleField::ALL {
        let text = args.style_text.field(field);
        if text.trim().is_empty() {
            continue;
        }
        match field.parse(text) {
            Ok(value) => style.set(field, value),
            Err(err) => logger.error(&err.to_string()),
        }
    }
    style.zero_line_on_y |= args.style_text.zero_line_on_y;
    style
}

fn parse_args() -> Result<CliArgs, String> {
    let mut positional: Vec<PathBuf> = Vec::new();
    let mut style_text = StyleConfigText::default();
    let mut style_file: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let field = match arg.as_str() {
            "--height" => Some(StyleField::Height),
            "--width" => Some(StyleField::Width),
            "--title-font-size" => Some(StyleField::TitleFontSize),
            "--axis-font-size" => Some(StyleField::AxisFontSize),
            "--value-font-size" => Some(StyleField::ValueFontSize),
            "--legend-font-size" => Some(StyleField::LegendFontSize),
            _ => None,
        };
        if let Some(field) = field {
            let value = args
                .next()
                .ok_or_else(|| format!("missing value for {arg}"))?;
            *style_text.field_mut(field) = value;
            continue;
        }

        match arg.as_str() {
            "--zero-line-y" => style_text.zero_line_on_y = true,
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                style_file = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            other if other.starts_with("--") => {
                return Err(format!("unknown argument `{other}`\n\n{}", usage_message()));
            }
            _ => positional.push(PathBuf::from(&arg)),
        }
    }

    let [workbook_path, output_dir]: [PathBuf; 2] = positional
        .try_into()
        .map_err(|_| format!("expected <workbook> <output-dir>\n\n{}", usage_message()))?;

    Ok(CliArgs {
        workbook_path,
        output_dir,
        style_text,
        style_file,
    })
}

fn usage_message() -> String {
    "Usage: render_workbook_charts <workbook> <output-dir> [options]\n\nOptions:\n  --height <px>              Image height (default: 1440)\n  --width <px>               Image width (default: 2560)\n  --title-font-size <px>     Title font size (default: 60)\n  --axis-font-size <px>      Axis title font size (default: 60)\n  --value-font-size <px>     Value label font size (default: 40)\n  --legend-font-size <px>    Legend font size (default: 60)\n  --zero-line-y              Draw the zero line on the value axis\n  --config <path>            JSON style file; explicit options above win\n  -h, --help                 Show this message"
        .to_owned()
}

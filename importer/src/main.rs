#[macro_use]
extern crate log;

mod host;

use std::path::Path;
use std::{env, fs};

use env_logger::Env;

use ppm_support::PpmFormatSupportPlugin;
use sitf_core::models::io::ImageWriterOptions;
use sitf_core::models::Image;
use sitf_core::plugins::{find_by_format_name, ImageFormatSupportPlugin};
use sitf_core::utils::print_intro;
use sitf_support::reader::decode_grid;
use sitf_support::writer::METADATA_OPTION;
use sitf_support::SitfFormatSupportPlugin;

use host::{ArgsFilePicker, DocumentSink, FilePicker, ImageDocumentSink, LogNotifier, Notifier};

const DEFAULT_LOGGING_LEVEL: &str = "info";
const SITF_EXTENSION: &str = "sitf";

type Plugins = Vec<Box<dyn ImageFormatSupportPlugin>>;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    print_intro();

    let args: Vec<String> = env::args().collect();
    debug!("args are: {:?}", args);

    let plugins: Plugins = vec![
        Box::new(SitfFormatSupportPlugin::new()),
        Box::new(PpmFormatSupportPlugin::new()),
    ];

    if !argument_present(&args, "goal-format") {
        error!("please specify a command:\nimporter --source=example.sitf --goal-format=ppm\nimporter --source=example.ppm --goal-format=sitf --metadata=\"author: cow\"");
        return;
    }

    let goal_format = argument_value(&args, "goal-format")
        .expect("expected goal format to be present because checked that argument is present");

    if goal_format.eq_ignore_ascii_case(SITF_EXTENSION) {
        encode_file(&plugins, &args);
    } else {
        import_file(&plugins, &args, &goal_format);
    }
}

/// Imports a SITF file into a fresh document and exports the document in the
/// requested format.
fn import_file(plugins: &Plugins, args: &Vec<String>, goal_format: &str) {
    let notifier = LogNotifier::new();
    let picker = ArgsFilePicker::new(argument_value(args, "source"), SITF_EXTENSION);

    let path = match picker.pick_source() {
        Some(v) => v,
        // cancelled, nothing to report
        None => return,
    };

    info!("importing {}", path.to_string_lossy());

    let text = match fs::read_to_string(&path) {
        Ok(v) => v,
        Err(err) => {
            error!("failed to read {}: {}", path.to_string_lossy(), err);
            return;
        }
    };

    let grid = decode_grid(&text);
    if grid.is_empty() || grid[0].is_empty() {
        notifier.warning("Failed to parse SITF file.");
        return;
    }

    let mut sink = ImageDocumentSink::new();
    host::paint_grid(&mut sink, &grid);

    let document = match sink.document() {
        Some(v) => v,
        None => {
            error!("document sink did not produce a document");
            return;
        }
    };

    if export_document(plugins, document, goal_format, args) {
        notifier.info("SITF file imported successfully.");
    }
}

/// Encodes a raster image file to SITF.
fn encode_file(plugins: &Plugins, args: &Vec<String>) {
    let from_file = match argument_value(args, "source") {
        Some(v) => v,
        None => {
            error!("please specify the file to encode with --source=");
            return;
        }
    };

    let extension = match Path::new(&from_file).extension() {
        Some(v) => v.to_string_lossy().to_lowercase(),
        None => {
            error!("failed to detect extension of file {}", from_file);
            return;
        }
    };

    let source_plugin = match find_by_format_name(plugins, &extension) {
        Some(v) => v,
        None => {
            error!("no format support for {}", extension);
            return;
        }
    };

    let file = match fs::read(&from_file) {
        Ok(v) => v,
        Err(err) => {
            error!("failed to read {}: {}", from_file, err);
            return;
        }
    };

    let image = match source_plugin.reader().read(&file) {
        Ok(v) => v,
        Err(err) => {
            error!("failed to read image as {}: {}", extension, err);
            return;
        }
    };

    info!("encoding {}x{} image to sitf", image.width, image.height);
    export_document(plugins, &image, SITF_EXTENSION, args);
}

fn export_document(plugins: &Plugins, document: &Image, goal_format: &str, args: &Vec<String>) -> bool {
    let target_plugin = match find_by_format_name(plugins, goal_format) {
        Some(v) => v,
        None => {
            error!("no format support for {}", goal_format);
            return false;
        }
    };

    let written = match target_plugin.writer().write(document, &writer_options(args)) {
        Ok(v) => v,
        Err(err) => {
            error!("failed to write image as {}: {}", goal_format, err);
            return false;
        }
    };

    let save_to = argument_value(args, "output")
        .unwrap_or_else(|| format!("./result.{}", goal_format.to_lowercase()));
    match fs::write(&save_to, &written) {
        Ok(_) => {
            info!("result saved to {}", save_to);
            true
        }
        Err(err) => {
            error!("failed to save result: {}", err);
            false
        }
    }
}

fn writer_options(args: &Vec<String>) -> ImageWriterOptions {
    match argument_value(args, "metadata") {
        Some(metadata) => ImageWriterOptions::default().with_option(METADATA_OPTION, &metadata),
        None => ImageWriterOptions::default(),
    }
}

fn argument_value(args: &Vec<String>, argument_name: &str) -> Option<String> {
    args.iter()
        .find(|s| s.starts_with(&format!("--{}=", argument_name)))
        .map(|s| s[s.find("=").expect("expected equals sign to be present because checked for that in filter")+1..].to_string())
}

fn argument_present(args: &Vec<String>, argument_name: &str) -> bool {
    args.iter().find(|s| s.starts_with(&format!("--{}=", argument_name))).is_some()
}

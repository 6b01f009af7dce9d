use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use reid_index::{
    export_dataset, load_directory_dataset, load_index_dataset, Args, IndexPaths, ReidDataset,
    Source,
};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let dataset = match build_dataset(&args) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Failed to build dataset index: {}", e);
            std::process::exit(1);
        }
    };

    info!("=> Dataset loaded");
    dataset.print_summary();

    if let Some(path) = &args.export {
        match export_dataset(&dataset, path) {
            Ok(()) => info!("Wrote index to {}", path.display()),
            Err(e) => {
                error!("Failed to export dataset: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn build_dataset(args: &Args) -> Result<ReidDataset, String> {
    match args.source {
        Source::Directory => {
            let root = required(&args.data_dir, "--data_dir")?;
            load_directory_dataset(root, args.relabel).map_err(|e| e.to_string())
        }
        Source::Index => {
            let paths = IndexPaths {
                train: required(&args.train_index, "--train_index")?.clone(),
                query: required(&args.query_index, "--query_index")?.clone(),
                gallery: required(&args.gallery_index, "--gallery_index")?.clone(),
                class_list: args.class_list.clone(),
            };
            load_index_dataset(&paths).map_err(|e| e.to_string())
        }
    }
}

fn required<'a>(value: &'a Option<PathBuf>, flag: &str) -> Result<&'a PathBuf, String> {
    value
        .as_ref()
        .ok_or_else(|| format!("{} is required for this source", flag))
}

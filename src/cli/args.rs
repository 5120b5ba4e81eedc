use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mesh500-processor")]
#[command(about = "JODC 500m mesh depth sounding processor")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a mesh sounding table to a derived format
    Convert {
        #[arg(short, long, help = "Input table file (mesh500_NN_NN naming)")]
        input: PathBuf,

        #[arg(
            short,
            long,
            default_value = "base60",
            help = "Output format: base10, base60, search60 or geojson"
        )]
        format: String,

        #[arg(long, help = "Lower longitude-minute bound (search60)")]
        lon_from: Option<u8>,

        #[arg(long, help = "Upper longitude-minute bound (search60)")]
        lon_to: Option<u8>,

        #[arg(long, help = "Lower latitude-minute bound (search60)")]
        lat_from: Option<u8>,

        #[arg(long, help = "Upper latitude-minute bound (search60)")]
        lat_to: Option<u8>,

        #[arg(short, long, help = "Output directory [default: output]")]
        output_dir: Option<PathBuf>,

        #[arg(long, default_value = "false", help = "Memory-map the input file")]
        use_mmap: bool,

        #[arg(long, default_value = "false", help = "Parse line batches in parallel")]
        parallel: bool,

        #[arg(long, default_value_t = num_cpus::get())]
        max_workers: usize,
    },

    /// Check coordinate ranges in a mesh sounding table
    Validate {
        #[arg(short, long, help = "Input table file")]
        input: PathBuf,

        #[arg(long, default_value = "false", help = "Memory-map the input file")]
        use_mmap: bool,
    },

    /// Display summary statistics for a mesh sounding table
    Info {
        #[arg(short, long, help = "Input table file")]
        input: PathBuf,
    },
}

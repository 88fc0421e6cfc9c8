// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::{Parser, Subcommand};
use jvmlocate::config::LocateConfig;
use jvmlocate::error::{Result, format_error_chain, get_exit_code};
use jvmlocate::finder::select_finder;
use jvmlocate::logging;
use jvmlocate::translate::{CygpathTranslator, PathTranslator};

#[derive(Parser)]
#[command(name = "jvmlocate")]
#[command(author, version, about = "JVM shared-library discovery for embedding", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the startup flags a JVM launcher needs for the given library
    #[command(visible_alias = "b")]
    BootArgs {
        /// Path to the JVM shared library (e.g. jvm.dll), Cygwin style
        jvm_lib_path: String,
    },

    /// Print the configured candidate installation roots
    #[command(visible_alias = "ls")]
    Locations,

    /// Convert one compatibility-layer path to native syntax
    Translate {
        /// Path to convert
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger based on CLI flags and environment
    logging::setup_logger(cli.verbose);

    // Load configuration once at startup
    let config = match std::env::current_dir()
        .map_err(Into::into)
        .and_then(|dir| LocateConfig::load(&dir))
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error_chain(&e));
            std::process::exit(get_exit_code(&e));
        }
    };

    let result: Result<()> = (|| {
        match cli.command {
            Commands::BootArgs { jvm_lib_path } => {
                let finder = select_finder(&config)?;
                for argument in finder.boot_arguments(&jvm_lib_path)? {
                    println!("{argument}");
                }
                Ok(())
            }
            Commands::Locations => {
                let finder = select_finder(&config)?;
                log::info!("Finder looks for {}", finder.library_file());
                for location in finder.search_locations() {
                    println!("{}", location.display());
                }
                Ok(())
            }
            Commands::Translate { path } => {
                let translator = CygpathTranslator::new(config.translator_command.clone());
                println!("{}", translator.translate(&path)?);
                Ok(())
            }
        }
    })();

    if let Err(e) = result {
        eprintln!("{}", format_error_chain(&e));
        std::process::exit(get_exit_code(&e));
    }
}

//! Command-line interface for zplate
//! This binary fills ZPL label templates with per-job field values and
//! compares generated labels against expected ones.
//!
//! Usage:
//!   zplate fill `<template>` [--set `<KEY=VALUE>`]... [--data `<json>`]  - Fill a template
//!   zplate diff `<generated>` `<expected>`                           - Compare two labels

use clap::{Arg, ArgAction, Command};
use std::fs;
use std::process;
use zplate::{first_mismatch, generate_from_file, TokenMap};

fn main() {
    let matches = Command::new("zplate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for filling and checking ZPL label templates")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("fill")
                .about("Fill a label template with field values")
                .arg(
                    Arg::new("template")
                        .help("Path to the ZPL template file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("set")
                        .long("set")
                        .short('s')
                        .action(ArgAction::Append)
                        .value_name("KEY=VALUE")
                        .help("Set one field value (repeatable)"),
                )
                .arg(
                    Arg::new("data")
                        .long("data")
                        .short('d')
                        .value_name("FILE")
                        .help("Read field values from a flat JSON object of strings"),
                ),
        )
        .subcommand(
            Command::new("diff")
                .about("Compare a generated label against an expected one")
                .arg(
                    Arg::new("generated")
                        .help("Path to the generated label")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("expected")
                        .help("Path to the expected label")
                        .required(true)
                        .index(2),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("fill", fill_matches)) => {
            let template = fill_matches.get_one::<String>("template").unwrap();
            let sets: Vec<&String> = fill_matches
                .get_many::<String>("set")
                .map(|values| values.collect())
                .unwrap_or_default();
            let data = fill_matches.get_one::<String>("data");
            handle_fill_command(template, &sets, data.map(|s| s.as_str()));
        }
        Some(("diff", diff_matches)) => {
            let generated = diff_matches.get_one::<String>("generated").unwrap();
            let expected = diff_matches.get_one::<String>("expected").unwrap();
            handle_diff_command(generated, expected);
        }
        _ => unreachable!(),
    }
}

/// Handle the fill command
fn handle_fill_command(template: &str, sets: &[&String], data: Option<&str>) {
    let mut details = TokenMap::new();

    if let Some(path) = data {
        load_json_record(path, &mut details);
    }

    for pair in sets {
        match pair.split_once('=') {
            Some((field, value)) => details.set(field, value),
            None => {
                eprintln!("Error: --set expects KEY=VALUE, got '{}'", pair);
                process::exit(1);
            }
        }
    }

    match generate_from_file(template, &details) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Load field values from a flat JSON object of strings.
/// Non-string values are rejected: the caller converts to text explicitly.
fn load_json_record(path: &str, details: &mut TokenMap) {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading record file: {}", e);
        process::exit(1);
    });

    let record: serde_json::Value = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing record file: {}", e);
        process::exit(1);
    });

    let object = record.as_object().unwrap_or_else(|| {
        eprintln!("Error: record file must contain a JSON object");
        process::exit(1);
    });

    for (field, value) in object {
        match value.as_str() {
            Some(text) => details.set(field, text),
            None => {
                eprintln!(
                    "Error: field '{}' is not a string; convert it to text in the record",
                    field
                );
                process::exit(1);
            }
        }
    }
}

/// Handle the diff command
fn handle_diff_command(generated_path: &str, expected_path: &str) {
    let generated = fs::read_to_string(generated_path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", generated_path, e);
        process::exit(1);
    });

    let expected = fs::read_to_string(expected_path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", expected_path, e);
        process::exit(1);
    });

    match first_mismatch(&generated, &expected) {
        None => println!("labels match"),
        Some(diff) => {
            eprintln!("{}", diff);
            process::exit(1);
        }
    }
}

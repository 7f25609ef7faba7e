use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use contract_abi::{
    arguments_from_json, canonical_type_string, function_signature, parse_type_with, to_json,
    to_yaml, NamedReport, ParserConfig, Type, TypeReport,
};
use serde::Serialize;
use std::fs;
use std::io::Read;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Yaml,
}

pub fn parse(signatures: &[String], config: &ParserConfig, format: OutputFormat) -> Result<()> {
    let mut reports = Vec::with_capacity(signatures.len());
    for signature in signatures {
        let ty = parse_type_with(signature, config)
            .with_context(|| format!("Failed to parse type signature '{}'", signature))?;
        reports.push((signature.as_str(), ty));
    }

    match format {
        OutputFormat::Human => {
            for (signature, ty) in &reports {
                println!("\n{}", signature.bold().cyan());
                println!("{}", "=".repeat(60).cyan());
                print_type(ty, 1);
            }
            println!();
        }
        _ => {
            let named: Vec<NamedReport> = reports
                .iter()
                .map(|(signature, ty)| NamedReport::new("", *signature, ty))
                .collect();
            emit(&named, format)?;
        }
    }

    Ok(())
}

pub fn argument(path: &str, config: &ParserConfig, format: OutputFormat) -> Result<()> {
    let content = read_input(path)?;
    let arguments = arguments_from_json(&content)
        .with_context(|| format!("Failed to read ABI arguments from {}", path))?;
    info!("Loaded {} argument(s) from {}", arguments.len(), path);

    let mut reports = Vec::with_capacity(arguments.len());
    for arg in &arguments {
        let signature = canonical_type_string(arg)
            .with_context(|| format!("Failed to expand argument '{}'", arg.name))?;
        let ty = parse_type_with(&signature, config)
            .with_context(|| format!("Failed to parse argument '{}' ({})", arg.name, signature))?;
        reports.push(NamedReport::new(arg.name.clone(), signature, &ty));
    }

    match format {
        OutputFormat::Human => {
            println!("\n{}", "Arguments:".bold().cyan());
            println!("{}", "=".repeat(60).cyan());
            for report in &reports {
                let name = if report.name.is_empty() {
                    "<unnamed>"
                } else {
                    report.name.as_str()
                };
                println!("\n{} {}", "●".green(), name.bold());
                println!("  {}: {}", "Signature".bold(), report.signature.bright_black());
                print_report(&report.ty, 1);
            }
            println!("\n{}", "=".repeat(60).cyan());
            println!("Parsed {} argument(s)\n", reports.len());
        }
        _ => emit(&reports, format)?,
    }

    Ok(())
}

pub fn signature(
    name: &str,
    types: &[String],
    config: &ParserConfig,
    format: OutputFormat,
) -> Result<()> {
    let parsed = types
        .iter()
        .map(|t| {
            parse_type_with(t, config)
                .with_context(|| format!("Failed to parse type signature '{}'", t))
        })
        .collect::<Result<Vec<Type>>>()?;
    let signature = function_signature(name, &parsed);

    match format {
        OutputFormat::Human => println!("{}", signature),
        _ => {
            #[derive(Serialize)]
            struct SignatureOutput<'a> {
                name: &'a str,
                signature: &'a str,
                inputs: &'a [Type],
            }
            emit(
                &SignatureOutput {
                    name,
                    signature: &signature,
                    inputs: &parsed,
                },
                format,
            )?;
        }
    }

    Ok(())
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
}

fn emit<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Yaml => to_yaml(value)?,
        _ => to_json(value)?,
    };
    println!("{}", rendered);
    Ok(())
}

fn print_type(ty: &Type, indent: usize) {
    print_report(&TypeReport::from_type(ty), indent);
}

fn print_report(report: &TypeReport, indent: usize) {
    let pad = "  ".repeat(indent);
    println!("{}{}: {}", pad, "Type".bold(), report.canonical.green());
    println!("{}{}: {}", pad, "Kind".bold(), report.kind);
    if let Some(width) = report.width {
        println!("{}{}: {}", pad, "Width".bold(), width);
    }
    if let Some(size) = report.array_size {
        println!("{}{}: {}", pad, "Length".bold(), size);
    }
    let dynamic = if report.dynamic {
        "dynamic".yellow()
    } else {
        "static".bright_blue()
    };
    println!("{}{}: {}", pad, "Layout".bold(), dynamic);
    println!(
        "{}{}: {} bytes ({} words)",
        pad,
        "Encoded".bold(),
        report.encoded_size,
        report.encoded_size / contract_abi::WORD_SIZE
    );
    println!("{}{}: {}", pad, "Native".bold(), report.host_type.bright_black());

    if let Some(element) = &report.element {
        println!("{}{}:", pad, "Element".bold());
        print_report(element, indent + 1);
    }
    for (i, field) in report.fields.iter().enumerate() {
        let label = if field.name.is_empty() {
            format!("#{}", i)
        } else {
            field.name.clone()
        };
        println!("{}{} {}:", pad, "Field".bold(), label);
        print_report(&field.ty, indent + 1);
    }
}

use std::path::PathBuf;
use clap::{Parser, Subcommand};
use formatter::{
    format_count, format_currency, format_rupees, or_placeholder, Amount, ColumnRule,
    FormatError, Table,
};
use std::fs::File;
use std::io::{self, Write};
use std::process;
use tracing::{info, warn, Level};


#[derive(Parser, Debug)]
#[command(
    name = "cli_formatter",
    version,
    about = "Форматирует количества и суммы по индийской системе разрядов (лакхи/кроры).",
    long_about = None,
)]
struct Args {
    /// Подробный лог в stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Форматирует целые количества: 1234567 -> 12,34,567
    Count {
        /// Значения
        #[arg(required = true)]
        values: Vec<String>,

        /// Остановиться на первом невалидном значении вместо заглушки
        #[arg(long)]
        strict: bool,
    },
    /// Форматирует суммы в крорах: 1234.5 -> ₹1,234.50 Cr
    Currency {
        /// Значения
        #[arg(required = true)]
        values: Vec<String>,

        /// Значения заданы в рупиях и переводятся в кроры
        #[arg(long)]
        from_rupees: bool,

        /// Без подписи " Cr"
        #[arg(long)]
        no_unit: bool,

        /// Остановиться на первом невалидном значении вместо заглушки
        #[arg(long)]
        strict: bool,
    },
    /// Форматирует колонки CSV-таблицы и пишет результат в stdout
    Table {
        /// Входной CSV-файл с заголовком
        #[arg(long)]
        input: PathBuf,

        /// Правило COLUMN=STYLE, где STYLE: count, crore, rupees-to-crore, rupees
        #[arg(long = "rule", required = true, value_parser = parse_rule)]
        rules: Vec<ColumnRule>,
    },
}

fn parse_rule(raw: &str) -> Result<ColumnRule, String> {
    raw.parse().map_err(|e: FormatError| e.to_string())
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), FormatError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match args.command {
        Command::Count { values, strict } => {
            for value in &values {
                let line = finish(format_count(value.as_str()), strict)?;
                writeln!(handle, "{line}")?;
            }
        }
        Command::Currency { values, from_rupees, no_unit, strict } => {
            for value in &values {
                let line = finish(format_value(value, from_rupees, no_unit), strict)?;
                writeln!(handle, "{line}")?;
            }
        }
        Command::Table { input, rules } => {
            if !input.exists() {
                eprintln!("input file does not exist: {}", input.display());
                process::exit(1)
            }

            let file = File::open(&input)?;
            let reader = io::BufReader::new(file);

            let mut table = Table::parse(reader)?;
            let report = table.apply(&rules)?;
            info!(
                formatted = report.formatted,
                substituted = report.substituted,
                "table formatted"
            );

            table.write_csv(handle)?;
        }
    }

    Ok(())
}

/// Форматирует одно значение для команды `currency`
fn format_value(raw: &str, from_rupees: bool, no_unit: bool) -> Result<String, FormatError> {
    let amount = Amount::parse(raw)?;
    let amount = if from_rupees { amount.in_crores() } else { amount };

    if no_unit {
        format_rupees(amount)
    } else {
        format_currency(amount)
    }
}

/// В строгом режиме ошибка прерывает работу, иначе превращается в заглушку
fn finish(result: Result<String, FormatError>, strict: bool) -> Result<String, FormatError> {
    if strict {
        result
    } else {
        if let Err(err) = &result {
            warn!(error = %err, "value replaced with placeholder");
        }
        Ok(or_placeholder(result))
    }
}

//! siftql — compile filter descriptions into MySQL statements.
//!
//! # Usage
//!
//! ```bash
//! # Compile a SELECT with a JSON filter
//! siftql select users --fields name,age \
//!     --filter '{"name":{"op":"STARTS_WITH","value":"Krish"}}' --limit 5
//!
//! # Compile an INSERT
//! siftql insert users --set '{"name":"Tejas","age":21}'
//!
//! # Show how a filter parses
//! siftql explain '{"OR":[{"age":{"op":"EQUALS","value":21}}]}'
//! ```

use clap::{Parser, Subcommand};
use colored::*;
use siftql::prelude::*;

#[derive(Parser)]
#[command(name = "siftql")]
#[command(version)]
#[command(about = "Compile typed filter trees into MySQL statements", long_about = None)]
#[command(after_help = "EXAMPLES:
    siftql select users --fields name,age --filter '{\"age\":{\"op\":\"GREATER_THAN\",\"value\":15}}'
    siftql update users --set '{\"name\":\"Tejas Prabhu\"}' --filter '{\"phone\":{\"op\":\"EQUALS\",\"value\":\"9123456789\"}}'
    siftql count users")]
struct Cli {
    /// Validate operator/value kinds before compiling
    #[arg(long, global = true)]
    check: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a SELECT statement
    Select {
        /// Target table name
        table: String,

        /// Columns to project (defaults to *)
        #[arg(short, long, value_delimiter = ',')]
        fields: Vec<String>,

        /// JSON filter description
        #[arg(short = 'w', long)]
        filter: Option<String>,

        #[arg(long, default_value_t = 10)]
        limit: u64,

        #[arg(long, default_value_t = 0)]
        offset: u64,
    },
    /// Compile an INSERT statement
    Insert {
        /// Target table name
        table: String,

        /// JSON object of column values
        #[arg(short, long)]
        set: String,
    },
    /// Compile an UPDATE statement
    Update {
        /// Target table name
        table: String,

        /// JSON object of column values
        #[arg(short, long)]
        set: String,

        /// JSON filter description
        #[arg(short = 'w', long)]
        filter: Option<String>,
    },
    /// Compile a DELETE statement
    Delete {
        /// Target table name
        table: String,

        /// JSON filter description
        #[arg(short = 'w', long)]
        filter: Option<String>,
    },
    /// Compile a COUNT statement
    Count {
        /// Target table name
        table: String,

        /// JSON filter description
        #[arg(short = 'w', long)]
        filter: Option<String>,
    },
    /// Show how a filter description parses and compiles
    Explain {
        /// JSON filter description
        filter: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> SiftResult<()> {
    match &cli.command {
        Commands::Select {
            table,
            fields,
            filter,
            limit,
            offset,
        } => {
            let expr = load_filter(filter.as_deref(), cli.check)?;
            let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
            print_sql(&select(table, &fields, &expr, *offset, *limit));
        }
        Commands::Insert { table, set } => {
            let row = load_row(set)?;
            print_sql(&insert(table, &row));
        }
        Commands::Update { table, set, filter } => {
            let row = load_row(set)?;
            let expr = load_filter(filter.as_deref(), cli.check)?;
            print_sql(&update(table, &row, &expr));
        }
        Commands::Delete { table, filter } => {
            let expr = load_filter(filter.as_deref(), cli.check)?;
            print_sql(&delete(table, &expr));
        }
        Commands::Count { table, filter } => {
            let expr = load_filter(filter.as_deref(), cli.check)?;
            print_sql(&count(table, Some(&expr)));
        }
        Commands::Explain { filter } => explain_filter(filter, cli.check)?,
    }

    Ok(())
}

fn load_filter(raw: Option<&str>, check: bool) -> SiftResult<WhereExpr> {
    let Some(raw) = raw else {
        return Ok(WhereExpr::none());
    };

    let json: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| SiftError::MalformedExpression(e.to_string()))?;
    let expr = parse_where(&json)?;

    if check {
        check_expr(&expr)?;
    }
    Ok(expr)
}

fn load_row(raw: &str) -> SiftResult<Row> {
    let json: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| SiftError::MalformedExpression(e.to_string()))?;
    parse_row(&json)
}

fn print_sql(sql: &str) {
    println!("{}", "Generated SQL:".green().bold());
    println!("{}", sql.white());
}

fn explain_filter(raw: &str, check: bool) -> SiftResult<()> {
    let expr = load_filter(Some(raw), check)?;

    println!("{}", "Parsed Filter:".green().bold());
    print_tree(&expr, 1);
    println!();

    let clause = where_clause(&expr);
    println!("{}", "Compiled clause:".green().bold());
    if clause.is_empty() {
        println!("  {}", "(empty — no clause emitted)".dimmed());
    } else {
        println!("  {}", clause.white());
    }

    Ok(())
}

fn print_tree(expr: &WhereExpr, depth: usize) {
    let pad = "  ".repeat(depth);
    match expr {
        WhereExpr::And(parts) => {
            println!("{}{}", pad, "AND".cyan().bold());
            for part in parts {
                print_tree(part, depth + 1);
            }
        }
        WhereExpr::Or(parts) => {
            println!("{}{}", pad, "OR".cyan().bold());
            for part in parts {
                print_tree(part, depth + 1);
            }
        }
        WhereExpr::Simple(simple) => {
            if simple.is_empty() {
                println!("{}{}", pad, "(no tests)".dimmed());
            }
            for (column, predicate) in simple.iter() {
                println!(
                    "{}{} {} {}",
                    pad,
                    column.white(),
                    predicate.op.to_string().cyan(),
                    predicate.value.to_string().yellow()
                );
            }
        }
    }
}

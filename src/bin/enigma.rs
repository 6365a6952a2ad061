//! Enigma option key CLI
//!
//! Command-line interface for generating and checking Fluke option keys.
//!
//! Usage:
//!   enigma nettool <serial> <option>
//!   enigma check-nettool <key> <serial> <option>
//!   enigma generate <serial> <option> <product>
//!   enigma decode <key>
//!   enigma linkrunner <serial> <option>
//!
//! With no subcommand, an interactive menu mirrors the original tool.

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use enigma_keys::products::{self, LINKRUNNER_PRODUCT_CODE, PRODUCT_TABLE};
use enigma_keys::{enigma2, enigma_c, format_grouped};

/// Fluke option key calculator for NetTool and other products
#[derive(Parser)]
#[command(name = "enigma")]
#[command(version)]
#[command(about = "Calculates and validates Fluke option keys", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a NetTool 10/100 option key
    Nettool {
        /// 10-digit serial number
        serial: String,
        /// Option number (0-9)
        option: u8,
    },

    /// Check a NetTool 10/100 option key
    CheckNettool {
        /// 12-hex-digit option key
        key: String,
        /// 10-digit serial number
        serial: String,
        /// Option number (0-9)
        option: u8,
    },

    /// Generate an option key for other Fluke products
    Generate {
        /// 7-digit serial number
        serial: String,
        /// Option number (0-999)
        option: u16,
        /// 4-digit product code
        product: String,
    },

    /// Decrypt and display an option key for other Fluke products
    Decode {
        /// 16-character option key
        key: String,
    },

    /// Generate a LinkRunner Pro option key (product code 7001)
    Linkrunner {
        /// 7-digit serial number
        serial: String,
        /// Option number (0-999)
        option: u16,
    },
}

// ============================================================================
// Commands Implementation
// ============================================================================

fn cmd_nettool(serial: &str, option: u8) -> Result<(), Box<dyn std::error::Error>> {
    info!("Encrypting with Enigma 1...");
    debug!(serial, option, "generating NetTool key");
    let key = enigma_c::generate_option_key(serial, option)?;
    println!("Option Key: {}", format_grouped(&key));
    Ok(())
}

fn cmd_check_nettool(key: &str, serial: &str, option: u8) -> Result<(), Box<dyn std::error::Error>> {
    debug!(serial, key, option, "checking NetTool key");
    let valid = enigma_c::check_option_key(option, key, serial)?;
    println!("Option {}", if valid { "valid" } else { "invalid" });
    Ok(())
}

fn cmd_generate(serial: &str, option: u16, product: &str) -> Result<(), Box<dyn std::error::Error>> {
    info!("Encrypting with Enigma 2...");
    debug!(serial, option, product, "generating Enigma2 key");
    let key = enigma2::generate_option_key(product, serial, option)?;
    println!("Option Key: {}", format_grouped(&key));
    Ok(())
}

fn cmd_decode(key: &str) -> Result<(), Box<dyn std::error::Error>> {
    info!("Decrypting with Enigma 2...");
    let decoded = enigma2::decode_option_key(key)?;
    let name = products::product_name(&decoded.product_code).unwrap_or("Unknown");
    println!("Product Code: {} -> {}", decoded.product_code, name);
    println!("SerialNumber: {}", decoded.serial_number);
    println!("OptionNumber: {:03}", decoded.option_number);
    Ok(())
}

// ============================================================================
// Interactive Menus
// ============================================================================

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompts until the user enters a number within `min..=max`.
fn menu_choice(message: &str, min: u32, max: u32) -> io::Result<u32> {
    loop {
        match prompt(message)?.parse::<u32>() {
            Ok(choice) if (min..=max).contains(&choice) => return Ok(choice),
            Ok(_) => println!("Invalid choice, please try again."),
            Err(_) => println!("Invalid input, please enter a number."),
        }
    }
}

/// Prompts until the user enters exactly `width` decimal digits.
fn prompt_digits(message: &str, width: usize) -> io::Result<String> {
    loop {
        let value = prompt(message)?;
        if value.len() == width && value.chars().all(|c| c.is_ascii_digit()) {
            return Ok(value);
        }
        println!("Value must be {width} digits.");
    }
}

/// Product and option selection menu.
///
/// Returns `(product_code, option_code)`, or `None` when cancelled.
fn product_code_menu() -> io::Result<Option<(String, String)>> {
    println!("--- Product Code Menu ---");
    for (i, product) in PRODUCT_TABLE.iter().enumerate() {
        println!("{}. {} - {}", i + 1, product.code, product.name);
    }
    println!("8. Custom Product Code");
    println!("0. Exit");

    let choice = menu_choice("Choose your option: ", 0, 8)?;
    if choice == 0 {
        return Ok(None);
    }
    if choice == 8 {
        let product_code = prompt_digits("Enter Product Code (4 digits): ", 4)?;
        let option_code = prompt_digits("Enter Option Code (3 digits): ", 3)?;
        return Ok(Some((product_code, option_code)));
    }

    let product = &PRODUCT_TABLE[choice as usize - 1];
    let options = products::options_for(product.code);
    if options.is_empty() {
        println!("No options defined for {}.", product.name);
        return Ok(None);
    }

    println!("--- Options for {} ---", product.name);
    for (i, (code, desc)) in options.iter().enumerate() {
        println!("{}. {} - {}", i + 1, code, desc);
    }
    println!("8. Custom Option Code");
    println!("0. Exit");

    let opt_choice = menu_choice("Choose your option: ", 0, 8)?;
    if opt_choice == 0 {
        return Ok(None);
    }
    let option_code = if opt_choice == 8 || opt_choice as usize > options.len() {
        prompt_digits("Enter Option Code (3 digits): ", 3)?
    } else {
        options[opt_choice as usize - 1].0.to_string()
    };
    Ok(Some((product.code.to_string(), option_code)))
}

fn menu_nettool_generate() -> Result<(), Box<dyn std::error::Error>> {
    let serial = prompt_digits("Enter Serial Number (10 digits): ", 10)?;
    println!("NetTool Options: 0=Inline 1=Reports/Ping 3=Personal 4=VoIP 5=SwitchWizard");
    let option = menu_choice("Enter Option Number (1 digit): ", 0, 9)? as u8;
    cmd_nettool(&serial, option)
}

fn menu_nettool_check() -> Result<(), Box<dyn std::error::Error>> {
    let serial = prompt_digits("Enter Serial Number (10 digits): ", 10)?;
    let key = loop {
        let key = prompt("Enter Option Key (12 hex digits): ")?;
        if key.len() == 12 && key.chars().all(|c| c.is_ascii_hexdigit()) {
            break key;
        }
        println!("Option key must be 12 hex digits.");
    };
    let option = menu_choice("Enter Option Number (1 digit): ", 0, 9)? as u8;
    cmd_check_nettool(&key, &serial, option)
}

fn menu_enigma2_generate() -> Result<(), Box<dyn std::error::Error>> {
    let serial = prompt_digits("Enter Serial Number (7 digits): ", 7)?;
    let Some((product_code, option_code)) = product_code_menu()? else {
        println!("Operation cancelled.");
        return Ok(());
    };
    let option: u16 = option_code.parse()?;
    cmd_generate(&serial, option, &product_code)
}

fn menu_enigma2_decode() -> Result<(), Box<dyn std::error::Error>> {
    let key = loop {
        let key = prompt("Enter Option Key (16 characters): ")?;
        if key.len() == 16 && key.chars().all(|c| c.is_ascii_alphanumeric()) {
            break key;
        }
        println!("Option key must be 16 alphanumeric characters.");
    };
    cmd_decode(&key.to_uppercase())
}

/// One pass through the main menu. Returns `false` on exit.
fn main_menu() -> io::Result<bool> {
    println!("--- Enigma {} Main Menu ---", env!("CARGO_PKG_VERSION"));
    println!("1. Generate NetTool 10/100 Option Key");
    println!("2. Check NetTool 10/100 Option Key");
    println!("3. Generate Option Key for Other Fluke Products");
    println!("4. Decrypt Option Key for Other Fluke Products");
    println!("0. Exit");

    let choice = menu_choice("Choose your option: ", 0, 4)?;
    if choice == 0 {
        return Ok(false);
    }
    let result = match choice {
        1 => menu_nettool_generate(),
        2 => menu_nettool_check(),
        3 => menu_enigma2_generate(),
        4 => menu_enigma2_decode(),
        _ => unreachable!(),
    };
    if let Err(e) = result {
        println!("Error: {e}");
    }
    Ok(true)
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Some(Commands::Nettool { serial, option }) => cmd_nettool(&serial, option),
        Some(Commands::CheckNettool {
            key,
            serial,
            option,
        }) => cmd_check_nettool(&key, &serial, option),
        Some(Commands::Generate {
            serial,
            option,
            product,
        }) => cmd_generate(&serial, option, &product),
        Some(Commands::Decode { key }) => cmd_decode(&key),
        Some(Commands::Linkrunner { serial, option }) => {
            cmd_generate(&serial, option, LINKRUNNER_PRODUCT_CODE)
        }
        None => loop {
            match main_menu() {
                Ok(true) => continue,
                Ok(false) => break Ok(()),
                Err(e) => break Err(e.into()),
            }
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

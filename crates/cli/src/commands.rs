use std::io;

use clap::{Args, CommandFactory, Subcommand};
use clap_complete::Shell;
use serde::Serialize;

use idnconv_core::Flags;
use idnconv_libidn2_ffi_bridge as bridge;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a domain name from Unicode form to ASCII (Punycode) form
    #[command(visible_alias = "utoa")]
    ToAscii {
        /// Domain name in Unicode form
        domain: String,

        #[command(flatten)]
        flags: FlagArgs,
    },

    /// Convert a domain name from ASCII (Punycode) form to Unicode form
    #[command(visible_alias = "atou")]
    ToUnicode {
        /// Domain name in ASCII form
        domain: String,

        #[command(flatten)]
        flags: FlagArgs,
    },

    /// Run the IDNA2008 Lookup protocol, producing the form used in DNS queries
    Lookup {
        /// Domain name in Unicode form
        domain: String,

        #[command(flatten)]
        flags: FlagArgs,
    },

    /// Run the IDNA2008 Register protocol on a label pair
    Register {
        /// Label in Unicode form
        #[arg(long)]
        ulabel: Option<String>,

        /// Label in ASCII form
        #[arg(long)]
        alabel: Option<String>,

        #[command(flatten)]
        flags: FlagArgs,
    },

    /// Print the idnconv and libidn2 versions
    Version,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// libidn2 processing options shared by the conversion subcommands.
///
/// Each subcommand applies its own default when nothing is given; any
/// explicit switch or raw bit pattern replaces that default entirely.
#[derive(Args)]
pub struct FlagArgs {
    /// Treat the input as already NFC-normalized
    #[arg(long)]
    nfc_input: bool,

    /// Verify that the produced A-label decodes back to the input
    #[arg(long)]
    alabel_roundtrip: bool,

    /// Apply TR46 transitional processing
    #[arg(long)]
    transitional: bool,

    /// Apply TR46 non-transitional processing
    #[arg(long)]
    nontransitional: bool,

    /// Permit unassigned code points
    #[arg(long)]
    allow_unassigned: bool,

    /// Enforce STD3 ASCII hostname rules
    #[arg(long)]
    std3: bool,

    /// Disable TR46 processing
    #[arg(long)]
    no_tr46: bool,

    /// Skip the A-label round-trip verification
    #[arg(long)]
    no_alabel_roundtrip: bool,

    /// Raw libidn2 flag bits, validated against the supported set
    #[arg(long, value_name = "BITS")]
    flags: Option<u32>,
}

impl FlagArgs {
    fn resolve(&self, default: Flags) -> idnconv_core::Result<Flags> {
        let mut flags = match self.flags {
            Some(bits) => Flags::from_bits(bits)?,
            None => Flags::empty(),
        };

        for (enabled, flag) in [
            (self.nfc_input, Flags::NFC_INPUT),
            (self.alabel_roundtrip, Flags::ALABEL_ROUNDTRIP),
            (self.transitional, Flags::TRANSITIONAL),
            (self.nontransitional, Flags::NONTRANSITIONAL),
            (self.allow_unassigned, Flags::ALLOW_UNASSIGNED),
            (self.std3, Flags::USE_STD3_ASCII_RULES),
            (self.no_tr46, Flags::NO_TR46),
            (self.no_alabel_roundtrip, Flags::NO_ALABEL_ROUNDTRIP),
        ] {
            if enabled {
                flags |= flag;
            }
        }

        if flags.is_empty() && self.flags.is_none() {
            flags = default;
        }

        Ok(flags)
    }
}

#[derive(Serialize)]
struct Conversion<'a> {
    operation: &'static str,
    input: &'a str,
    flags: Flags,
    output: &'a str,
}

fn emit(
    json: bool,
    operation: &'static str,
    input: &str,
    flags: Flags,
    output: &str,
) -> eyre::Result<()> {
    if json {
        let record = Conversion {
            operation,
            input,
            flags,
            output,
        };
        println!("{}", serde_json::to_string(&record)?);
    } else {
        println!("{output}");
    }
    Ok(())
}

impl Commands {
    pub fn execute(self, json: bool) -> eyre::Result<()> {
        match self {
            Commands::ToAscii { domain, flags } => {
                let flags = flags.resolve(Flags::NO_TR46)?;
                tracing::debug!(%domain, %flags, "converting to ASCII form");
                let output = bridge::to_ascii(&domain, flags)?;
                emit(json, "to-ascii", &domain, flags, &output)
            }

            Commands::ToUnicode { domain, flags } => {
                let flags = flags.resolve(Flags::empty())?;
                tracing::debug!(%domain, %flags, "converting to Unicode form");
                let output = bridge::to_unicode(&domain, flags)?;
                emit(json, "to-unicode", &domain, flags, &output)
            }

            Commands::Lookup { domain, flags } => {
                let flags = flags.resolve(Flags::NFC_INPUT)?;
                tracing::debug!(%domain, %flags, "running lookup protocol");
                let output = bridge::lookup(&domain, flags)?;
                emit(json, "lookup", &domain, flags, &output)
            }

            Commands::Register {
                ulabel,
                alabel,
                flags,
            } => {
                let flags = flags.resolve(Flags::NFC_INPUT)?;
                tracing::debug!(?ulabel, ?alabel, %flags, "running register protocol");
                let output = bridge::register(ulabel.as_deref(), alabel.as_deref(), flags)?;
                let input = match (&ulabel, &alabel) {
                    (Some(u), Some(a)) => format!("{u} {a}"),
                    (Some(u), None) => u.clone(),
                    (None, Some(a)) => a.clone(),
                    (None, None) => String::new(),
                };
                emit(json, "register", &input, flags, &output)
            }

            Commands::Version => {
                let libidn2 = bridge::library_version().unwrap_or("unknown");
                if json {
                    println!(
                        "{}",
                        serde_json::json!({
                            "idnconv": env!("CARGO_PKG_VERSION"),
                            "libidn2": libidn2,
                        })
                    );
                } else {
                    println!("idnconv {} (libidn2 {libidn2})", env!("CARGO_PKG_VERSION"));
                }
                Ok(())
            }

            Commands::Completion { shell } => {
                let mut cmd = crate::Cli::command();
                clap_complete::generate(shell, &mut cmd, "idnconv", &mut io::stdout());
                Ok(())
            }
        }
    }
}

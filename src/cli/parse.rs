//! Two-pass argument parsing: tolerant serve-flag extraction, then the
//! strict combined grammar.
//!
//! The launcher understands two vocabularies at once. Serve flags are pulled
//! out by a tolerant pass that never fails, domain tokens are reclaimed from
//! whatever that pass left behind, and everything still unclaimed is
//! forwarded verbatim to the application after a `--args` separator. Only
//! the claimed tokens are handed to clap, which stays the single authority
//! on flag arity and rendering. clap has no parse-known-args, so the
//! tolerant pass is a scan over a fixed flag table.

use clap::Parser;

use crate::lib::errors::CliError;

use super::args::LauncherArgs;

/// One recognized long flag and whether it consumes a value token.
#[derive(Debug, Clone, Copy)]
struct FlagSpec {
    name: &'static str,
    takes_value: bool,
}

/// Serve pass-through grammar, applied tolerantly.
const SERVE_FLAGS: &[FlagSpec] = &[
    FlagSpec {
        name: "--dev",
        takes_value: false,
    },
    FlagSpec {
        name: "--port",
        takes_value: true,
    },
    FlagSpec {
        name: "--show",
        takes_value: false,
    },
    FlagSpec {
        name: "--allow-websocket-origin",
        takes_value: true,
    },
];

/// Launcher-domain grammar, used to reclaim tokens the serve pass skipped.
/// Help and version belong to the combined grammar and must reach clap.
const DOMAIN_FLAGS: &[FlagSpec] = &[
    FlagSpec {
        name: "--config-file",
        takes_value: true,
    },
    FlagSpec {
        name: "--help",
        takes_value: false,
    },
    FlagSpec {
        name: "-h",
        takes_value: false,
    },
    FlagSpec {
        name: "--version",
        takes_value: false,
    },
    FlagSpec {
        name: "-V",
        takes_value: false,
    },
];

/// How a raw token was claimed across the two passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Claim {
    Serve,
    Domain,
    File,
    Leftover,
    Open,
}

/// Parse the raw argument list into the combined grammar plus the leftover
/// tokens destined for the application.
pub fn parse(raw: &[String]) -> Result<(LauncherArgs, Vec<String>), CliError> {
    let mut claims = vec![Claim::Open; raw.len()];
    claim_serve(raw, &mut claims);
    claim_domain(raw, &mut claims);

    let kept = std::iter::once("lantern".to_string()).chain(
        raw.iter()
            .zip(&claims)
            .filter(|(_, claim)| **claim != Claim::Leftover)
            .map(|(token, _)| token.clone()),
    );
    let args = LauncherArgs::try_parse_from(kept)?;

    if args.files.is_empty() && args.config_file.is_none() {
        return Err(CliError::MissingInput);
    }

    let leftover = raw
        .iter()
        .zip(&claims)
        .filter(|(_, claim)| **claim == Claim::Leftover)
        .map(|(token, _)| token.clone())
        .collect();
    Ok((args, leftover))
}

/// Tolerant pass: claim serve flags and their value tokens, skip the rest.
fn claim_serve(raw: &[String], claims: &mut [Claim]) {
    let mut i = 0;
    while i < raw.len() {
        let token = &raw[i];
        if let Some(spec) = lookup(SERVE_FLAGS, token) {
            claims[i] = Claim::Serve;
            if spec.takes_value && !has_inline_value(token) {
                if let Some(next) = raw.get(i + 1) {
                    if !is_flag_like(next) {
                        claims[i + 1] = Claim::Serve;
                        i += 2;
                        continue;
                    }
                    // Dangling value flag; clap reports the missing value.
                }
            }
        }
        i += 1;
    }
}

/// Partition the tokens the serve pass skipped into domain tokens, file
/// positionals, and leftovers.
///
/// A bare token right after an unrecognized flag is presumed to be that
/// flag's value and stays with it in the leftovers; any recognized flag
/// resets that presumption.
fn claim_domain(raw: &[String], claims: &mut [Claim]) {
    let mut shadowed = false;
    let mut i = 0;
    while i < raw.len() {
        if claims[i] == Claim::Serve {
            shadowed = false;
            i += 1;
            continue;
        }
        let token = &raw[i];
        if let Some(spec) = lookup(DOMAIN_FLAGS, token) {
            claims[i] = Claim::Domain;
            shadowed = false;
            if spec.takes_value && !has_inline_value(token) {
                if let Some(next) = raw.get(i + 1) {
                    if !is_flag_like(next) {
                        claims[i + 1] = Claim::Domain;
                        i += 2;
                        continue;
                    }
                }
            }
            i += 1;
            continue;
        }
        if is_flag_like(token) {
            claims[i] = Claim::Leftover;
            shadowed = !has_inline_value(token);
        } else if shadowed {
            claims[i] = Claim::Leftover;
            shadowed = false;
        } else {
            claims[i] = Claim::File;
        }
        i += 1;
    }
}

fn lookup(flags: &[FlagSpec], token: &str) -> Option<FlagSpec> {
    let name = token.split_once('=').map_or(token, |(name, _)| name);
    flags.iter().copied().find(|spec| spec.name == name)
}

fn has_inline_value(token: &str) -> bool {
    token.contains('=')
}

fn is_flag_like(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}

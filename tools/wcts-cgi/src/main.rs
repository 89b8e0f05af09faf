//! WCTS CGI mainline
//!
//! One process per request: the transport facts come from the CGI
//! environment (`REQUEST_METHOD`, `CONTENT_LENGTH`), the body from
//! stdin, and exactly one response is written to stdout as a
//! content-type header line, a blank line, then the document. Service
//! exceptions are a response like any other, so the process exits 0
//! whenever a response reached the client; status 1 is reserved for the
//! fallthrough where emission itself failed.
//!
//! Configuration:
//! - `WCTS_ETC_PATH`: colon-separated extra search locations for the
//!   capabilities document, tried after the default `.`
//! - `RUST_LOG`: log filtering; logs go to stderr, never stdout

use std::env;
use std::io::{self, Read, Write};
use std::process::ExitCode;
use wcts_core::{dispatch, Services, WctsError, WctsResponse};
use wcts_georef::EpsgRegistry;
use wcts_store::{CapabilitiesStore, FileFinder};
use wcts_xml::parse_document;

const METHOD_VAR: &str = "REQUEST_METHOD";
const CONTENT_LENGTH_VAR: &str = "CONTENT_LENGTH";
const ETC_PATH_VAR: &str = "WCTS_ETC_PATH";

/// Transport facts for one request, captured once from the process
/// environment so the rest of the program never touches it.
#[derive(Debug, Clone, Default)]
struct RequestContext {
    method: Option<String>,
    content_length: Option<String>,
}

impl RequestContext {
    fn from_env() -> Self {
        Self {
            method: env::var(METHOD_VAR).ok(),
            content_length: env::var(CONTENT_LENGTH_VAR).ok(),
        }
    }
}

/// Obtain the raw request bytes per the transport contract.
fn collect_request(
    context: &RequestContext,
    input: &mut dyn Read,
) -> Result<Vec<u8>, WctsError> {
    let method = context.method.as_deref().ok_or(WctsError::MethodNotSet)?;
    if method.eq_ignore_ascii_case("GET") {
        return collect_kvp_request(context);
    }
    read_post_body(context, input)
}

/// KVP requests are a defined stub: the rejection is guaranteed,
/// whatever the query string holds.
fn collect_kvp_request(_context: &RequestContext) -> Result<Vec<u8>, WctsError> {
    Err(WctsError::KvpUnsupported)
}

fn read_post_body(
    context: &RequestContext,
    input: &mut dyn Read,
) -> Result<Vec<u8>, WctsError> {
    match &context.content_length {
        Some(declared) => {
            let length = leading_integer(declared);
            let mut body = vec![0u8; length];
            input.read_exact(&mut body).map_err(|_| WctsError::ShortBody)?;
            Ok(body)
        }
        None => {
            let mut body = Vec::with_capacity(100);
            input
                .read_to_end(&mut body)
                .map_err(|_| WctsError::ShortBody)?;
            Ok(body)
        }
    }
}

/// C `atoi` semantics: the leading run of digits, else zero.
fn leading_integer(text: &str) -> usize {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

fn capabilities_store() -> CapabilitiesStore {
    let mut finder = FileFinder::new();
    if let Ok(paths) = env::var(ETC_PATH_VAR) {
        for location in paths.split(':').filter(|p| !p.is_empty()) {
            finder.push_location(location);
        }
    }
    CapabilitiesStore::new(finder)
}

/// The full request cycle: read, parse, dispatch. Every failure is
/// already a response by the time this returns.
fn run(context: &RequestContext, input: &mut dyn Read, services: &Services<'_>) -> WctsResponse {
    let raw = match collect_request(context, input) {
        Ok(raw) => raw,
        Err(error) => return WctsResponse::from(error),
    };
    let forest = match parse_document(&raw) {
        Ok(forest) => forest,
        Err(error) => return WctsResponse::from(WctsError::Parse(error)),
    };
    dispatch(&forest, services)
}

/// The one-time emission: header line, blank line, body.
fn emit(response: &WctsResponse, out: &mut dyn Write) -> io::Result<()> {
    write!(out, "Content-type: {}\n\n", response.content_type())?;
    out.write_all(&response.body())?;
    out.flush()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wcts_cgi=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let context = RequestContext::from_env();
    let registry = EpsgRegistry::bundled();
    let store = capabilities_store();
    let services = Services::new(&registry, &store);

    let response = run(&context, &mut io::stdin().lock(), &services);
    if response.is_exception() {
        tracing::warn!(content_type = response.content_type(), "request failed");
    } else {
        tracing::info!(content_type = response.content_type(), "request served");
    }

    match emit(&response, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // The client got nothing, or only part of a response.
            tracing::error!(%error, "unable to emit response");
            ExitCode::from(1)
        }
    }
}

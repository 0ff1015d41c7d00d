use anyhow::{Context, Result, bail};

use mailvet_lib::{FinderOutcome, FinderReport, PersonQuery, Verdict};

use crate::args::Cli;

#[cfg(feature = "with-mx")]
use mailvet_lib::{MxError, MxLookup};

/// One verification row: the verdict plus optional annotations.
#[derive(serde::Serialize)]
pub struct VerdictReport<'a> {
    #[serde(flatten)]
    pub verdict: &'a Verdict,
    #[cfg(feature = "with-mx")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mx: Option<MxSummary>,
}

#[cfg(feature = "with-mx")]
#[derive(serde::Serialize)]
pub struct MxSummary {
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    pub records: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(feature = "with-mx")]
impl MxSummary {
    pub fn from_lookup(lookup: &MxLookup) -> Self {
        Self {
            domain: lookup.ascii_domain.clone(),
            primary: lookup.primary().map(|record| record.exchange.clone()),
            records: lookup
                .records
                .iter()
                .map(|record| format!("{} {}", record.preference, record.exchange))
                .collect(),
            error: None,
        }
    }

    pub fn from_error(domain: &str, err: &MxError) -> Self {
        Self {
            domain: domain.to_string(),
            primary: None,
            records: Vec::new(),
            error: Some(err.to_string()),
        }
    }

    pub fn human_summary(&self) -> String {
        if let Some(error) = &self.error {
            format!("lookup failed ({error})")
        } else if let Some(primary) = &self.primary {
            format!("primary {primary} ({} record(s))", self.records.len())
        } else {
            "no records".to_string()
        }
    }
}

pub fn write_verdict(report: &VerdictReport<'_>, cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" => {
            write_verdict_human(report);
            Ok(())
        }
        "json" => write_json(report, cli),
        other => bail!("unknown --format '{other}', use: human|json"),
    }
}

fn write_verdict_human(report: &VerdictReport<'_>) {
    let verdict = report.verdict;
    println!(
        "[{}] {} :: decided by {}",
        verdict.status.label().to_uppercase(),
        verdict.email,
        verdict.deciding_provider
    );
    for result in &verdict.details {
        let confidence = result
            .confidence
            .map(|value| format!(", conf={value:.2}"))
            .unwrap_or_default();
        println!(
            "        {:<13} {:<8}{} :: {}",
            result.provider.label(),
            result.status.label(),
            confidence,
            result.detail
        );
    }
    #[cfg(feature = "with-mx")]
    if let Some(mx) = &report.mx {
        println!("        mx: {}", mx.human_summary());
    }
}

pub fn write_finder(report: &FinderReport, query: &PersonQuery, cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" => {
            write_finder_human(report, query);
            Ok(())
        }
        "json" => {
            let payload = FinderPayload { query, report };
            write_json(&payload, cli)
        }
        other => bail!("unknown --format '{other}', use: human|json"),
    }
}

fn write_finder_human(report: &FinderReport, query: &PersonQuery) {
    println!(
        "Search: {} {} @ {} :: {}",
        query.first_name, query.last_name, query.domain, report.provider
    );
    match &report.outcome {
        FinderOutcome::Found {
            email,
            confidence,
            sources,
        } => {
            let confidence = confidence
                .map(|value| format!(" (confidence {value:.2})"))
                .unwrap_or_default();
            println!("[FOUND] {email}{confidence}");
            for (idx, source) in sources.iter().take(3).enumerate() {
                println!("        source {}: {source}", idx + 1);
            }
            if sources.len() > 3 {
                println!("        ... and {} more", sources.len() - 3);
            }
        }
        FinderOutcome::NotFound { detail } => println!("[NOT FOUND] {detail}"),
        FinderOutcome::Failed { detail } => println!("[PROVIDER ERROR] {detail}"),
    }
}

#[derive(serde::Serialize)]
struct FinderPayload<'a> {
    query: &'a PersonQuery,
    #[serde(flatten)]
    report: &'a FinderReport,
}

fn write_json<T: serde::Serialize>(payload: &T, cli: &Cli) -> Result<()> {
    let s = serde_json::to_string_pretty(payload)?;
    if let Some(path) = &cli.out {
        write_all_atomically(path, s.as_bytes())?;
    } else {
        println!("{s}");
    }
    Ok(())
}

fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;

    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp)?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}

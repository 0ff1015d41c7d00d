use trust_dns_resolver::{Resolver, error::ResolveError};

use super::{Error, MxLookup, MxRecord};

/// Resolve the MX records of `domain` with the system resolver.
///
/// The domain is IDNA-normalized before querying. Records come back
/// sorted ascending by preference and deduplicated, so
/// [`MxLookup::primary`] is the best exchange.
pub fn check_mx(domain: &str) -> Result<MxLookup, Error> {
    let ascii = normalize_domain(domain)?;
    let resolver =
        Resolver::from_system_conf().map_err(|source| Error::ResolverInit { source })?;
    lookup_with(&resolver, ascii)
}

pub(crate) fn lookup_with<R>(resolver: &R, ascii_domain: String) -> Result<MxLookup, Error>
where
    R: LookupMx,
{
    let mut records = resolver
        .lookup_mx(&ascii_domain)
        .map_err(|source| Error::Lookup { source })?;
    records.sort();
    records.dedup();

    Ok(MxLookup {
        ascii_domain,
        records,
    })
}

pub(crate) fn normalize_domain(domain: &str) -> Result<String, Error> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDomain);
    }
    idna::domain_to_ascii(trimmed).map_err(|source| Error::Idna { source })
}

fn normalize_exchange(exchange: String) -> String {
    exchange.trim_end_matches('.').to_ascii_lowercase()
}

pub(crate) trait LookupMx {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError>;
}

impl LookupMx for Resolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError> {
        let lookup = Resolver::mx_lookup(self, domain)?;
        Ok(lookup
            .iter()
            .map(|mx| MxRecord::new(mx.preference(), normalize_exchange(mx.exchange().to_utf8())))
            .collect())
    }
}

#[cfg(test)]
impl LookupMx for crate::mx::tests::StubResolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError> {
        (self.on_lookup)(domain)
    }
}

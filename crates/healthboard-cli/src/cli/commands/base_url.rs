//! `healthboard base-url` – print the resolved API base URL.

use anyhow::Result;
use healthboard_core::base_url::{
    authority_of, resolve_with_source, BaseUrlSource, EnvOverrides, ALIAS_ENV_VAR, PRIMARY_ENV_VAR,
};

pub fn run_base_url(explain: bool) -> Result<()> {
    let env = EnvOverrides::from_process_env();
    let (resolved, source) = resolve_with_source(&env);
    println!("{}", resolved);

    if explain {
        match source {
            BaseUrlSource::Primary => println!("source: {} (primary)", PRIMARY_ENV_VAR),
            BaseUrlSource::Alias => println!("source: {} (legacy alias)", ALIAS_ENV_VAR),
            BaseUrlSource::Default => println!("source: built-in default"),
        }
        match authority_of(&resolved) {
            Some((scheme, authority)) => println!("scheme: {}  authority: {}", scheme, authority),
            None => println!("note: not an absolute URL (relative prefix)"),
        }
    }

    Ok(())
}

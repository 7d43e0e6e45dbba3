use narrow_dispatch::{DispatchConfig, NullPolicy};

use super::CommandError;

/// Parse dispatch flags into a configuration.
///
/// Recognized: `--loose`, `--strict`, `--tag-field=<name>`. The last
/// occurrence of a flag wins.
pub fn parse_dispatch_options(args: &[String]) -> Result<DispatchConfig, CommandError> {
    let mut config = DispatchConfig::default();

    for arg in args {
        if arg == "--loose" {
            config.null_policy = NullPolicy::Loose;
        } else if arg == "--strict" {
            config.null_policy = NullPolicy::Strict;
        } else if let Some(field) = arg.strip_prefix("--tag-field=") {
            if field.is_empty() {
                return Err(CommandError::MissingOptionValue("--tag-field"));
            }
            config.tag_field = field.to_string();
        } else {
            return Err(CommandError::UnknownOption(arg.clone()));
        }
    }

    tracing::debug!(
        null_policy = %config.null_policy,
        tag_field = %config.tag_field,
        "parsed dispatch options"
    );
    Ok(config)
}

use asyncstore_core::Reply;
use asyncstore_module::{
    AsyncLocalStorage, HostConfig, ModuleDescriptor, NativeModule, StorageRequest,
};
use clap::Subcommand;
use eyre::{eyre, Result, WrapErr};
use serde_json::Value;
use tracing::debug;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the values stored for one or more keys
    Get {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Store KEY=VALUE pairs
    Set {
        #[arg(required = true, value_parser = parse_pair)]
        pairs: Vec<(String, String)>,
    },
    /// Remove one or more keys
    Remove {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Remove every key
    Clear,
    /// List every stored key
    Keys,
    /// Print the module's registration metadata
    Describe,
    /// Call a bridge method by name with a JSON array of arguments
    Invoke {
        method: String,
        #[arg(default_value = "[]")]
        args: String,
    },
}

impl Commands {
    /// Run the command and return the JSON to print
    pub fn execute(self, host: &HostConfig) -> Result<Value> {
        let request = match self {
            Commands::Describe => {
                return serde_json::to_value(ModuleDescriptor::async_local_storage())
                    .wrap_err("Failed to encode module descriptor");
            }
            Commands::Invoke { method, args } => return invoke(host, &method, &args),
            Commands::Get { keys } => StorageRequest::MultiGet { keys },
            Commands::Set { pairs } => StorageRequest::MultiSet { pairs },
            Commands::Remove { keys } => StorageRequest::MultiRemove { keys },
            Commands::Clear => StorageRequest::Clear,
            Commands::Keys => StorageRequest::GetAllKeys,
        };

        let mut module = attach(host);
        Ok(module.execute(&request).into_value())
    }
}

fn attach(host: &HostConfig) -> AsyncLocalStorage {
    let mut module = AsyncLocalStorage::new();
    let state = module.attach(host);
    debug!(?state, path = ?module.store_path(), "module attached");
    module
}

fn invoke(host: &HostConfig, method: &str, args: &str) -> Result<Value> {
    let args: Vec<Value> =
        serde_json::from_str(args).wrap_err("ARGS must be a JSON array of arguments")?;

    let mut module = attach(host);
    let mut reply: Option<Reply> = None;
    module.invoke(method, &args, Box::new(|r: Reply| reply = Some(r)));

    reply
        .map(|reply| reply.into_value())
        .ok_or_else(|| eyre!("module '{}' did not reply to {}", module.descriptor().name, method))
}

fn parse_pair(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn host(temp_dir: &TempDir) -> HostConfig {
        HostConfig::new("org.example.cli").with_runtime_dir(temp_dir.path())
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            parse_pair("token=a=b").unwrap(),
            ("token".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_pair("empty=").unwrap(), ("empty".to_string(), String::new()));
        assert!(parse_pair("no-separator").is_err());
    }

    #[test]
    fn test_set_then_get_across_invocations() {
        let temp_dir = TempDir::new().unwrap();
        let set = Commands::Set {
            pairs: vec![("theme".into(), "dark".into())],
        }
        .execute(&host(&temp_dir))
        .unwrap();
        assert_eq!(set, json!([null]));

        let get = Commands::Get {
            keys: vec!["theme".into(), "missing".into()],
        }
        .execute(&host(&temp_dir))
        .unwrap();
        assert_eq!(get, json!([null, [["theme", "dark"], ["missing", null]]]));
    }

    #[test]
    fn test_missing_identity_reports_not_ready() {
        let temp_dir = TempDir::new().unwrap();
        let host = HostConfig::new("").with_runtime_dir(temp_dir.path());

        let keys = Commands::Keys.execute(&host).unwrap();
        assert_eq!(keys, json!([[{"message": "Could not open storage file"}], null]));
    }

    #[test]
    fn test_invoke_raw_method() {
        let temp_dir = TempDir::new().unwrap();
        let reply = Commands::Invoke {
            method: "multiSet".into(),
            args: r#"[[["a", "1"], ["b", "2"]]]"#.into(),
        }
        .execute(&host(&temp_dir))
        .unwrap();
        assert_eq!(reply, json!([null]));

        let keys = Commands::Invoke {
            method: "getAllKeys".into(),
            args: "[]".into(),
        }
        .execute(&host(&temp_dir))
        .unwrap();
        assert_eq!(keys, json!([null, ["a", "b"]]));
    }

    #[test]
    fn test_invoke_rejects_non_array_args() {
        let temp_dir = TempDir::new().unwrap();
        let result = Commands::Invoke {
            method: "clear".into(),
            args: "{}".into(),
        }
        .execute(&host(&temp_dir));
        assert!(result.is_err());
    }

    #[test]
    fn test_describe() {
        let descriptor = Commands::Describe
            .execute(&HostConfig::default())
            .unwrap();
        assert_eq!(descriptor["name"], json!("RCTAsyncLocalStorage"));
        assert_eq!(descriptor["methods"].as_array().map(Vec::len), Some(5));
    }
}

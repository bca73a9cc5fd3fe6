use super::args::{Cli, Commands};
use anyhow::Result;
use podcore::store::StorageBackend;
use podcore::Pod;

pub fn run(cli: Cli) -> Result<()> {
    let pod = Pod::open(&cli.root)?;
    tracing::debug!(root = %cli.root.display(), "opened pod");

    for line in execute(&pod, cli.command)? {
        println!("{}", line);
    }
    Ok(())
}

/// Run a command against `pod` and return the lines to print.
pub fn execute<B: StorageBackend>(pod: &Pod<B>, command: Commands) -> Result<Vec<String>> {
    match command {
        Commands::Path { pod_path } => Ok(vec![pod.get_doc(pod_path).into_pod_path()]),
        Commands::List => Ok(pod
            .list_documents()?
            .into_iter()
            .map(|doc| doc.into_pod_path())
            .collect()),
        Commands::Show { pod_path } => {
            let doc = pod.get_doc(pod_path);
            Ok(vec![pod.body(&doc)?])
        }
        Commands::FrontMatter { pod_path, json } => {
            let doc = pod.get_doc(pod_path);
            let front_matter = pod.front_matter(&doc)?;
            if json {
                Ok(vec![serde_json::to_string_pretty(front_matter.data())?])
            } else {
                Ok(front_matter.export().map(str::to_string).into_iter().collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podcore::config::PodConfig;
    use podcore::store::mem_backend::MemBackend;

    fn pod() -> Pod<MemBackend> {
        let backend = MemBackend::with_files([
            ("/content/pages/home.yaml", "title: Home\n"),
            ("/content/posts/hello.md", "---\ntitle: Hello\n---\nHi there\n"),
        ]);
        Pod::new(backend, PodConfig::default())
    }

    #[test]
    fn test_path_is_echoed_verbatim() {
        let lines = execute(
            &pod(),
            Commands::Path {
                pod_path: "/content//pages/home.yaml".to_string(),
            },
        )
        .unwrap();
        assert_eq!(lines, vec!["/content//pages/home.yaml"]);
    }

    #[test]
    fn test_list() {
        let lines = execute(&pod(), Commands::List).unwrap();
        assert_eq!(lines, vec!["/content/pages/home.yaml", "/content/posts/hello.md"]);
    }

    #[test]
    fn test_show_body() {
        let lines = execute(
            &pod(),
            Commands::Show {
                pod_path: "/content/posts/hello.md".to_string(),
            },
        )
        .unwrap();
        assert_eq!(lines, vec!["Hi there"]);
    }

    #[test]
    fn test_front_matter_raw_and_json() {
        let raw = execute(
            &pod(),
            Commands::FrontMatter {
                pod_path: "/content/posts/hello.md".to_string(),
                json: false,
            },
        )
        .unwrap();
        assert_eq!(raw, vec!["title: Hello"]);

        let json = execute(
            &pod(),
            Commands::FrontMatter {
                pod_path: "/content/posts/hello.md".to_string(),
                json: true,
            },
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json[0]).unwrap();
        assert_eq!(value["title"], "Hello");
    }

    #[test]
    fn test_missing_document_errors() {
        let err = execute(
            &pod(),
            Commands::Show {
                pod_path: "/content/nope.md".to_string(),
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("Document not found: /content/nope.md"));
    }
}

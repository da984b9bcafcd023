#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::Path;

    use drs::parsing;
    use drs::validating::DrsValidator;

    #[test]
    fn ensure_samples_parse() {
        let dir = Path::new("tests/samples/");

        assert!(dir.exists(), "samples directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read samples directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if matches!(
                path.extension()
                    .and_then(|s| s.to_str()),
                Some("json" | "yaml" | "yml")
            ) {
                files.push(path);
            }
        }

        assert!(files.len() >= 2, "Expected JSON and YAML samples");

        let mut failures = Vec::new();

        for file in &files {
            let content = parsing::load(file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {}", file, e));

            match parsing::parse(file, &content) {
                Ok(project) => {
                    let validator = DrsValidator::new(
                        &project
                            .specs
                            .project_id,
                        &project.specs,
                        &project.vocabulary,
                    );
                    if let Err(e) = validator {
                        failures.push(format!("{:?}: {}", file, e));
                    }
                }
                Err(e) => failures.push(format!("{:?}: {}", file, e)),
            }
        }

        if !failures.is_empty() {
            panic!("Samples failed to load:\n{}", failures.join("\n"));
        }
    }

    #[test]
    fn yaml_project() {
        let filename = Path::new("tests/samples/zoo.yaml");
        let content = parsing::load(filename).unwrap();
        let project = parsing::parse(filename, &content).unwrap();

        let validator = DrsValidator::new("zoo", &project.specs, &project.vocabulary).unwrap();

        assert!(validator
            .validate_directory("ZOO/cat")
            .unwrap()
            .validated());
        assert!(validator
            .validate_directory("ZOO/dog/gray")
            .unwrap()
            .validated());
        assert!(validator
            .validate_file_name("cat-grey.txt")
            .unwrap()
            .validated());
        assert!(!validator
            .validate_file_name("cat-green.txt")
            .unwrap()
            .validated());
    }
}

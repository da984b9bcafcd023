#[cfg(test)]
mod roundtrip {
    use std::thread;

    use drs::generating::DrsGenerator;
    use drs::language::DrsKind;
    use drs::validating::DrsValidator;

    use crate::{assignments, project};

    #[test]
    fn generated_expressions_validate() {
        let project = project();
        let generator =
            DrsGenerator::new("cmip6plus", &project.specs, &project.vocabulary).unwrap();
        let validator =
            DrsValidator::new("cmip6plus", &project.specs, &project.vocabulary).unwrap();

        let mapping = assignments(&[
            ("mip_era", "CMIP6Plus"),
            ("activity_id", "ScenarioMIP"),
            ("institution_id", "IPSL"),
            ("source_id", "IPSL-CM6A-LR"),
            ("experiment_id", "historical"),
            ("member_id", "r1i1p1f1"),
            ("table_id", "Amon"),
            ("variable_id", "tas"),
            ("grid_label", "gr"),
            ("directory_date", "v20240101"),
            ("time_range", "185001-201412"),
        ]);

        for kind in [DrsKind::Directory, DrsKind::FileName, DrsKind::DatasetId] {
            let generated = generator
                .generate_from_mapping(&mapping, kind)
                .unwrap();
            assert!(generated.validated(), "{:?}", generated.errors);

            let report = validator
                .validate(&generated.generated_expression, kind)
                .unwrap();
            assert!(report.validated(), "{}: {:?}", report.expression, report.errors);
            assert_eq!(report.warning_count(), 0);
        }
    }

    #[test]
    fn shared_between_threads() {
        let project = project();
        let generator =
            DrsGenerator::new("cmip6plus", &project.specs, &project.vocabulary).unwrap();
        let validator =
            DrsValidator::new("cmip6plus", &project.specs, &project.vocabulary).unwrap();

        let experiments = ["amip", "historical"];

        thread::scope(|scope| {
            for experiment in experiments {
                let generator = &generator;
                let validator = &validator;
                scope.spawn(move || {
                    for _ in 0..50 {
                        let words = [
                            "gn",
                            "MIROC6",
                            "r2i2p1f2",
                            "CMIP6Plus",
                            "od550aer",
                            experiment,
                            "MIROC",
                            "ACmon",
                            "CMIP",
                        ];
                        let generated = generator
                            .generate_dataset_id_from_bag_of_words(&words)
                            .unwrap();
                        assert!(generated.validated());

                        let report = validator
                            .validate_dataset_id(&generated.generated_expression)
                            .unwrap();
                        assert!(report.validated());
                        assert!(report
                            .expression
                            .contains(experiment));
                    }
                });
            }
        });
    }
}

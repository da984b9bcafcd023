#[cfg(test)]
mod file_name {
    use drs::language::Issue;
    use drs::validating::DrsValidator;

    use crate::project;

    #[test]
    fn valid_file_name() {
        let project = project();
        let validator =
            DrsValidator::new("cmip6plus", &project.specs, &project.vocabulary).unwrap();

        let report = validator
            .validate_file_name("od550aer_ACmon_MIROC6_amip_r2i2p1f2_gn_201211-201212.nc")
            .unwrap();
        assert!(report.validated(), "{:?}", report.errors);
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn optional_time_range() {
        let project = project();
        let validator =
            DrsValidator::new("cmip6plus", &project.specs, &project.vocabulary).unwrap();

        let report = validator
            .validate_file_name("od550aer_ACmon_MIROC6_amip_r2i2p1f2_gn.nc")
            .unwrap();
        assert!(report.validated());
        assert_eq!(
            report.warnings,
            vec![Issue::MissingToken {
                collection_id: "time_range".to_string(),
                position: 7
            }]
        );
    }

    #[test]
    fn extension_required() {
        let project = project();
        let validator =
            DrsValidator::new("cmip6plus", &project.specs, &project.vocabulary).unwrap();

        let expressions = [
            "od550aer_ACmon_MIROC6_amip_r2i2p1f2_gn",
            "od550aer_ACmon_MIROC6_amip_r2i2p1f2_gn.md",
            "od550aer_ACmon_MIROC6_amip_r2i2p1f2_gn.n",
            "od550aer_ACmon_MIROC6_amip_r2i2p1f2_gn.n c",
        ];

        for expression in expressions {
            let report = validator
                .validate_file_name(expression)
                .unwrap();
            assert_eq!(
                report.errors,
                vec![Issue::FileNameExtension {
                    expected_extension: ".nc".to_string()
                }],
                "{}",
                expression
            );
            assert_eq!(report.expression, expression);
        }
    }

    #[test]
    fn extra_tokens() {
        let project = project();
        let validator =
            DrsValidator::new("cmip6plus", &project.specs, &project.vocabulary).unwrap();

        // rejected by the optional time range, so attributed to it
        let report = validator
            .validate_file_name("od550aer_ACmon_MIROC6_amip_r2i2p1f2_gn_201211-20121.nc")
            .unwrap();
        assert_eq!(
            report.errors,
            vec![Issue::ExtraToken {
                token: "201211-20121".to_string(),
                position: 6,
                collection_id: Some("time_range".to_string())
            }]
        );

        let report = validator
            .validate_file_name("od550aer_ACmon_MIROC6_amip_r2i2p1f2_gn_201211- 20121.nc")
            .unwrap();
        assert_eq!(
            report.errors,
            vec![Issue::ExtraToken {
                token: "201211- 20121".to_string(),
                position: 6,
                collection_id: Some("time_range".to_string())
            }]
        );

        let report = validator
            .validate_file_name("od550aer_ACmon_MIROC6_amip_r2i2p1f2_gn_201211-201212_hello.nc")
            .unwrap();
        assert_eq!(
            report.errors,
            vec![Issue::ExtraToken {
                token: "hello".to_string(),
                position: 7,
                collection_id: None
            }]
        );
    }

    #[test]
    fn nothing_but_the_extension() {
        let project = project();
        let validator =
            DrsValidator::new("cmip6plus", &project.specs, &project.vocabulary).unwrap();

        let report = validator
            .validate_file_name("_.nc")
            .unwrap();

        let mut expected = vec![Issue::ExtraChar { column: 1 }];
        for (index, collection_id) in [
            "variable_id",
            "table_id",
            "source_id",
            "experiment_id",
            "member_id",
            "grid_label",
        ]
        .iter()
        .enumerate()
        {
            expected.push(Issue::MissingToken {
                collection_id: collection_id.to_string(),
                position: index + 1,
            });
        }
        assert_eq!(report.errors, expected);
        assert_eq!(
            report.warnings,
            vec![Issue::MissingToken {
                collection_id: "time_range".to_string(),
                position: 7
            }]
        );
    }
}

#[cfg(test)]
mod mapping {
    use drs::generating::DrsGenerator;
    use drs::language::{DrsKind, GenerationReport, Issue};

    use crate::{assignments, project};

    #[test]
    fn complete_directory() {
        let project = project();
        let generator =
            DrsGenerator::new("cmip6plus", &project.specs, &project.vocabulary).unwrap();

        let mapping = assignments(&[
            ("mip_era", "CMIP6Plus"),
            ("activity_id", "CMIP"),
            ("institution_id", "NCC"),
            ("source_id", "MIROC6"),
            ("experiment_id", "amip"),
            ("member_id", "r2i2p1f2"),
            ("table_id", "ACmon"),
            ("variable_id", "od550aer"),
            ("grid_label", "gn"),
            ("directory_date", "v20190923"),
        ]);

        let report = generator
            .generate_directory_from_mapping(&mapping)
            .unwrap();
        assert!(report.validated(), "{:?}", report.errors);
        assert_eq!(report.warning_count(), 0);
        assert_eq!(
            report.generated_expression,
            "CMIP6Plus/CMIP/NCC/MIROC6/amip/r2i2p1f2/ACmon/od550aer/gn/v20190923"
        );
        assert_eq!(report.mapping_used, mapping);
        assert_eq!(report.kind, DrsKind::Directory);
    }

    #[test]
    fn file_name_with_time_range() {
        let project = project();
        let generator =
            DrsGenerator::new("cmip6plus", &project.specs, &project.vocabulary).unwrap();

        let mapping = assignments(&[
            ("variable_id", "od550aer"),
            ("table_id", "ACmon"),
            ("source_id", "MIROC6"),
            ("experiment_id", "amip"),
            ("member_id", "r2i2p1f2"),
            ("grid_label", "gn"),
            ("time_range", "201211-201212"),
        ]);

        let report = generator
            .generate_file_name_from_mapping(&mapping)
            .unwrap();
        assert!(report.validated());
        assert_eq!(
            report.generated_expression,
            "od550aer_ACmon_MIROC6_amip_r2i2p1f2_gn_201211-201212.nc"
        );
    }

    #[test]
    fn file_name_without_time_range() {
        let project = project();

        // entries naming no collection of the layout are ignored
        let mapping = assignments(&[
            ("member_id", "r2i2p1f2"),
            ("activity_id", "CMIP"),
            ("source_id", "MIROC6"),
            ("mip_era", "CMIP6Plus"),
            ("experiment_id", "amip"),
            ("variable_id", "od550aer"),
            ("table_id", "ACmon"),
            ("grid_label", "gn"),
            ("institution_id", "IPSL"),
        ]);

        let missing = Issue::MissingToken {
            collection_id: "time_range".to_string(),
            position: 7,
        };

        let generator =
            DrsGenerator::new("cmip6plus", &project.specs, &project.vocabulary).unwrap();
        let report = generator
            .generate_file_name_from_mapping(&mapping)
            .unwrap();
        assert!(report.validated());
        assert_eq!(
            report.generated_expression,
            "od550aer_ACmon_MIROC6_amip_r2i2p1f2_gn.nc"
        );
        assert_eq!(report.warnings, vec![missing.clone()]);

        let generator = DrsGenerator::new("cmip6plus", &project.specs, &project.vocabulary)
            .unwrap()
            .pedantic(true);
        let report = generator
            .generate_file_name_from_mapping(&mapping)
            .unwrap();
        assert!(!report.validated());
        assert_eq!(report.errors, vec![missing]);
        assert!(report
            .warnings
            .is_empty());
    }

    #[test]
    fn invalid_and_missing_tokens() {
        let project = project();
        let generator =
            DrsGenerator::new("cmip6plus", &project.specs, &project.vocabulary).unwrap();

        let mapping = assignments(&[
            ("mip_era", "CMIP6Plus"),
            ("activity_id", "CMIP"),
            ("institution_id", "IPSL"),
            ("source_id", "MIROC7"),
            ("experiment_id", "amip"),
            ("member_id", "r2i2p1f2"),
            ("table_id", "ACmon"),
            ("variable_id", "od550aer"),
        ]);

        let report = generator
            .generate_dataset_id_from_mapping(&mapping)
            .unwrap();
        assert_eq!(
            report.generated_expression,
            format!(
                "CMIP6Plus.CMIP.IPSL.{}.amip.r2i2p1f2.ACmon.od550aer.{}",
                GenerationReport::INVALID_TAG,
                GenerationReport::MISSING_TAG
            )
        );
        assert_eq!(
            report.errors,
            vec![
                Issue::InvalidToken {
                    token: "MIROC7".to_string(),
                    position: 4,
                    collection_id_or_constant_value: "source_id".to_string()
                },
                Issue::MissingToken {
                    collection_id: "grid_label".to_string(),
                    position: 9
                },
            ]
        );
    }

    #[test]
    fn generic_entry_point_agrees() {
        let project = project();
        let generator =
            DrsGenerator::new("cmip6plus", &project.specs, &project.vocabulary).unwrap();

        let mapping = assignments(&[("grid_label", "gr"), ("variable_id", "tas")]);
        assert_eq!(
            generator.generate_from_mapping(&mapping, DrsKind::DatasetId),
            generator.generate_dataset_id_from_mapping(&mapping)
        );
    }
}

#[cfg(test)]
mod dataset_id {
    use drs::language::{DrsKind, Issue};
    use drs::validating::DrsValidator;

    use crate::project;

    const VALID: &str = "CMIP6Plus.CMIP.IPSL.MIROC6.amip.r2i2p1f2.ACmon.od550aer.gn";

    fn errors(expression: &str) -> Vec<Issue> {
        let project = project();
        let validator =
            DrsValidator::new("cmip6plus", &project.specs, &project.vocabulary).unwrap();
        validator
            .validate_dataset_id(expression)
            .unwrap()
            .errors
    }

    #[test]
    fn valid_dataset_id() {
        assert!(errors(VALID).is_empty());
    }

    #[test]
    fn surrounding_space() {
        let project = project();
        let validator =
            DrsValidator::new("cmip6plus", &project.specs, &project.vocabulary).unwrap();

        for expression in [format!(" {}", VALID), format!("{} ", VALID)] {
            let report = validator
                .validate_dataset_id(&expression)
                .unwrap();
            assert!(report.validated());
            assert_eq!(report.warnings, vec![Issue::Space]);
        }
    }

    #[test]
    fn wrong_separator() {
        assert_eq!(
            errors("CMIP6Plus_CMIP_IPSL_MIROC6_amip_r2i2p1f2_ACmon_od550aer_gn"),
            vec![Issue::Unparsable {
                expected_kind: DrsKind::DatasetId
            }]
        );
    }

    #[test]
    fn trailing_characters() {
        assert_eq!(
            errors("CMIP6Plus.CMIP.IPSL.MIROC6.amip.r2i2p1f2.ACmon.od550aer.gn."),
            vec![Issue::ExtraChar { column: 59 }]
        );
        assert_eq!(
            errors("CMIP6Plus.CMIP.IPSL.MIROC6.amip.r2i2p1f2.ACmon.od550aer.gn.."),
            vec![Issue::ExtraChar { column: 59 }]
        );
        assert_eq!(
            errors("CMIP6Plus.CMIP.IPSL.MIROC6.amip.r2i2p1f2.ACmon.od550aer.gn.. "),
            vec![Issue::ExtraChar { column: 59 }]
        );
        assert_eq!(
            errors("CMIP6Plus.CMIP.IPSL..MIROC6.amip.r2i2p1f2.ACmon.od550aer.gn. .."),
            vec![
                Issue::ExtraSeparator { column: 21 },
                Issue::ExtraChar { column: 60 }
            ]
        );
    }

    #[test]
    fn leading_separator() {
        assert_eq!(
            errors(".CMIP6Plus.CMIP.IPSL.MIROC6.amip.r2i2p1f2.ACmon.od550aer.gn"),
            vec![Issue::ExtraSeparator { column: 1 }]
        );
    }

    #[test]
    fn spaces_inside() {
        assert_eq!(
            errors("CMIP6Plus.CMIP.IPSL. MIROC6.amip.r2i2p1f2.ACmon.od550aer.gn"),
            vec![Issue::InvalidToken {
                token: " MIROC6".to_string(),
                position: 4,
                collection_id_or_constant_value: "source_id".to_string()
            }]
        );
        assert_eq!(
            errors("CMIP6Plus.CMIP.IPSL.  MIROC6.amip.r2i2p1f2.ACmon.od550aer.gn"),
            vec![Issue::InvalidToken {
                token: "  MIROC6".to_string(),
                position: 4,
                collection_id_or_constant_value: "source_id".to_string()
            }]
        );
        assert_eq!(
            errors("CMIP6Plus.CMIP.IPSL. .MIROC6.amip.r2i2p1f2.ACmon.od550aer.gn"),
            vec![Issue::BlankToken { column: 21 }]
        );
    }

    #[test]
    fn joined_tokens() {
        assert_eq!(
            errors("CMIP6Plus.CMIP.IPSL.MIROC6.amip.r2i2p1f2.ACmon.od550aer-gn"),
            vec![
                Issue::InvalidToken {
                    token: "od550aer-gn".to_string(),
                    position: 8,
                    collection_id_or_constant_value: "variable_id".to_string()
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
        let validator =
            DrsValidator::new("cmip6plus", &project.specs, &project.vocabulary).unwrap();

        let expression = "CMIP6Plus.CMIP.IPSL..MIROC6.amip.r2i2p1f2.ACmon.od550aer.gn";
        assert_eq!(
            validator.validate(expression, DrsKind::DatasetId),
            validator.validate_dataset_id(expression)
        );
    }
}

//! Tests for candidate selection and assembly

#[cfg(test)]
mod tests {
    use crate::config::{
        GeneratorContext, Knob, OperationConfig, OperationSpec, Preset, QuantGranularity,
        QuantMode, QuantizerConfig, TensorKind, TuningScope,
    };
    use crate::error::TuneError;
    use crate::estimator::EstimatorKind;
    use crate::tuning::{candidates, select_options};

    fn sym(bits: u8) -> QuantizerConfig {
        QuantizerConfig::new(bits, QuantMode::Symmetric, QuantGranularity::PerTensor)
    }

    fn asym(bits: u8) -> QuantizerConfig {
        QuantizerConfig::new(bits, QuantMode::Asymmetric, QuantGranularity::PerTensor)
    }

    fn ctx(scope: TuningScope, preset: Preset) -> GeneratorContext {
        GeneratorContext::new(scope, preset)
    }

    // -------------------------------------------------------------------------
    // Selector
    // -------------------------------------------------------------------------

    #[test]
    fn test_select_performance_picks_fastest() {
        let configs = vec![sym(4), sym(8)];
        let options =
            select_options(&configs, None, &ctx(TuningScope::new(), Preset::Performance)).unwrap();
        assert_eq!(options[0], configs[0]);
    }

    #[test]
    fn test_select_accuracy_picks_most_accurate() {
        let configs = vec![sym(4), sym(8)];
        let options =
            select_options(&configs, None, &ctx(TuningScope::new(), Preset::Accuracy)).unwrap();
        assert_eq!(options[0], configs[1]);
    }

    #[test]
    fn test_select_empty_hardware_list_fails() {
        let err = select_options(&[], None, &ctx(TuningScope::new(), Preset::Performance))
            .unwrap_err();
        assert!(matches!(err, TuneError::EmptyHardwareConfig));
    }

    #[test]
    fn test_select_optimal_is_the_default() {
        let configs = vec![sym(4), sym(8)];
        let optimal = sym(8);
        let options = select_options(
            &configs,
            Some(&optimal),
            &ctx(TuningScope::new(), Preset::Performance),
        )
        .unwrap();
        assert_eq!(options[0], optimal);
    }

    #[test]
    fn test_select_admits_in_scope_alternates() {
        let configs = vec![sym(4), sym(8)];
        let scope = TuningScope::new().with(Knob::Bits);
        let options = select_options(&configs, None, &ctx(scope, Preset::Performance)).unwrap();
        assert_eq!(options, vec![sym(4), sym(8)]);
    }

    #[test]
    fn test_select_rejects_off_scope_alternates() {
        let configs = vec![sym(4), sym(8)];
        let options =
            select_options(&configs, None, &ctx(TuningScope::new(), Preset::Performance)).unwrap();
        // The 8-bit point differs on an off-scope axis and falls back to the
        // default, which is already present.
        assert_eq!(options, vec![sym(4)]);
    }

    #[test]
    fn test_select_rejects_partially_off_scope_alternates() {
        let other = QuantizerConfig::new(8, QuantMode::Symmetric, QuantGranularity::PerChannel);
        let configs = vec![sym(4), other];
        let scope = TuningScope::new().with(Knob::Bits);
        // Differs on bits (in scope) and granularity (off scope): rejected.
        let options = select_options(&configs, None, &ctx(scope, Preset::Performance)).unwrap();
        assert_eq!(options, vec![sym(4)]);
    }

    #[test]
    fn test_select_deduplicates_candidates() {
        let configs = vec![sym(4), sym(8), sym(8), sym(4)];
        let scope = TuningScope::new().with(Knob::Bits);
        let options = select_options(&configs, None, &ctx(scope, Preset::Performance)).unwrap();
        assert_eq!(options, vec![sym(4), sym(8)]);
    }

    // -------------------------------------------------------------------------
    // Assembler
    // -------------------------------------------------------------------------

    #[test]
    fn test_assemble_activations_only() {
        let spec = OperationSpec { activations: vec![asym(8)], weights: vec![] };
        let configs =
            candidates(&spec, &ctx(TuningScope::new(), Preset::Performance), None).unwrap();

        assert_eq!(configs.len(), 1);
        let config = &configs[0];
        assert!(config.quantize);
        assert!(config.weights.is_none());
        let acts = config.activations.as_ref().unwrap();
        assert_eq!(acts.bits, 8);
        // Default range estimator is attached.
        let estimator = acts.range_estimator.as_ref().unwrap();
        assert_eq!(estimator.min.as_ref().unwrap().kind, EstimatorKind::Min);
        assert_eq!(estimator.max.as_ref().unwrap().kind, EstimatorKind::Max);
    }

    #[test]
    fn test_assemble_layer_scope_adds_skip_variant() {
        let spec = OperationSpec { activations: vec![asym(8)], weights: vec![] };
        let scope = TuningScope::new().with(Knob::Layer);
        let configs = candidates(&spec, &ctx(scope, Preset::Performance), None).unwrap();

        assert_eq!(configs.len(), 2);
        assert!(configs[0].quantize);
        assert!(!configs[1].quantize);
        // The skip variant is a copy of the first merged candidate.
        assert_eq!(
            configs[1].activations.as_ref().unwrap().bits,
            configs[0].activations.as_ref().unwrap().bits
        );
    }

    #[test]
    fn test_assemble_cross_product_of_axes() {
        let spec = OperationSpec {
            activations: vec![asym(4), asym(8)],
            weights: vec![sym(2), sym(4), sym(8)],
        };
        let scope = TuningScope::new().with(Knob::Bits);
        let configs = candidates(&spec, &ctx(scope, Preset::Performance), None).unwrap();
        assert_eq!(configs.len(), 2 * 3);

        let scope = TuningScope::new().with(Knob::Bits).with(Knob::Layer);
        let configs = candidates(&spec, &ctx(scope, Preset::Performance), None).unwrap();
        assert_eq!(configs.len(), 2 * 3 + 1);
    }

    #[test]
    fn test_assemble_short_circuits_disabled_optimal() {
        let spec = OperationSpec {
            activations: vec![asym(4), asym(8)],
            weights: vec![sym(4), sym(8)],
        };
        let optimal = OperationConfig { quantize: false, activations: None, weights: None };
        let scope = TuningScope::new().with(Knob::Bits).with(Knob::Layer);
        let configs = candidates(&spec, &ctx(scope, Preset::Performance), Some(&optimal)).unwrap();
        assert_eq!(configs, vec![optimal]);
    }

    #[test]
    fn test_assemble_optimal_seeds_default_candidate() {
        let spec = OperationSpec { activations: vec![asym(4), asym(8)], weights: vec![] };
        let mut optimal = OperationConfig::quantized();
        optimal.set_tensor(TensorKind::Activations, asym(8));

        let configs = candidates(
            &spec,
            &ctx(TuningScope::new(), Preset::Performance),
            Some(&optimal),
        )
        .unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].activations.as_ref().unwrap().bits, 8);
    }

    #[test]
    fn test_assemble_estimator_scope_multiplies_candidates() {
        let spec = OperationSpec { activations: vec![asym(8)], weights: vec![] };
        let scope = TuningScope::new().with(Knob::EstimatorType);
        let configs = candidates(&spec, &ctx(scope, Preset::Performance), None).unwrap();
        // Asymmetric activations: 2 min types x 4 max types.
        assert_eq!(configs.len(), 8);
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let spec = OperationSpec {
            activations: vec![asym(4), asym(8)],
            weights: vec![sym(4), sym(8)],
        };
        let scope = TuningScope::new().with(Knob::Bits).with(Knob::EstimatorType);
        let context = ctx(scope, Preset::Performance);

        let first = candidates(&spec, &context, None).unwrap();
        let second = candidates(&spec, &context, None).unwrap();
        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use crate::config::{
        GeneratorContext, Knob, OperationSpec, Preset, QuantGranularity, QuantMode,
        QuantizerConfig, TuningScope,
    };
    use crate::tuning::{candidates, select_options};

    fn configs_from_bits(bits: &[u8]) -> Vec<QuantizerConfig> {
        bits.iter()
            .map(|b| QuantizerConfig::new(*b, QuantMode::Symmetric, QuantGranularity::PerTensor))
            .collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_cross_product_size_law(
            act_bits in prop::collection::vec(2u8..10, 1..4),
            wgt_bits in prop::collection::vec(2u8..10, 1..4),
            layer in any::<bool>(),
        ) {
            let mut scope = TuningScope::new().with(Knob::Bits);
            if layer {
                scope.enable(Knob::Layer);
            }
            let ctx = GeneratorContext::new(scope, Preset::Performance);

            let spec = OperationSpec {
                activations: configs_from_bits(&act_bits),
                weights: configs_from_bits(&wgt_bits),
            };
            let a = select_options(&spec.activations, None, &ctx).unwrap().len();
            let w = select_options(&spec.weights, None, &ctx).unwrap().len();

            let configs = candidates(&spec, &ctx, None).unwrap();
            prop_assert_eq!(configs.len(), a * w + usize::from(layer));
        }

        #[test]
        fn prop_selected_options_are_unique(
            bits in prop::collection::vec(2u8..6, 1..8),
        ) {
            let scope = TuningScope::new().with(Knob::Bits);
            let ctx = GeneratorContext::new(scope, Preset::Performance);
            let configs = configs_from_bits(&bits);

            let options = select_options(&configs, None, &ctx).unwrap();
            for (i, a) in options.iter().enumerate() {
                for b in &options[i + 1..] {
                    prop_assert_ne!(a, b);
                }
            }
        }

        #[test]
        fn prop_alternates_differ_only_in_scope(
            bits in prop::collection::vec(2u8..10, 1..6),
            modes in prop::collection::vec(any::<bool>(), 1..6),
        ) {
            let scope = TuningScope::new().with(Knob::Bits);
            let ctx = GeneratorContext::new(scope.clone(), Preset::Performance);

            let configs: Vec<QuantizerConfig> = bits
                .iter()
                .zip(modes.iter().cycle())
                .map(|(b, symmetric)| {
                    let mode = if *symmetric {
                        QuantMode::Symmetric
                    } else {
                        QuantMode::Asymmetric
                    };
                    QuantizerConfig::new(*b, mode, QuantGranularity::PerTensor)
                })
                .collect();

            let options = select_options(&configs, None, &ctx).unwrap();
            let default = &options[0];
            for alternate in &options[1..] {
                for axis in default.diff_axes(alternate) {
                    prop_assert!(scope.contains(axis));
                }
            }
        }

        #[test]
        fn prop_generation_is_idempotent(
            act_bits in prop::collection::vec(2u8..10, 0..3),
            wgt_bits in prop::collection::vec(2u8..10, 0..3),
        ) {
            prop_assume!(!act_bits.is_empty() || !wgt_bits.is_empty());
            let scope = TuningScope::new().with(Knob::Bits).with(Knob::Layer);
            let ctx = GeneratorContext::new(scope, Preset::Performance);

            let spec = OperationSpec {
                activations: configs_from_bits(&act_bits),
                weights: configs_from_bits(&wgt_bits),
            };
            let first = candidates(&spec, &ctx, None).unwrap();
            let second = candidates(&spec, &ctx, None).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}

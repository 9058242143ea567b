/// Vector kernels: softmax, temperature scaling, argmax
use mini_llm_core::error::{Error, Result};

/// Softmax activation into a caller buffer: `output[i] = exp(input[i]) / sum(exp(input))`
pub fn softmax_into(input: &[f32], output: &mut [f32]) -> Result<()> {
    if input.is_empty() {
        return Err(Error::EmptyLogits);
    }
    if input.len() != output.len() {
        return Err(Error::DimensionMismatch(format!(
            "softmax output has {} slots for {} logits",
            output.len(),
            input.len()
        )));
    }

    if let Some(i) = input.iter().position(|x| !x.is_finite()) {
        return Err(Error::InvalidDistribution(format!("logit {} is {}", i, input[i])));
    }

    // Find max for numerical stability
    let max = input.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    let mut sum = 0.0;
    for (out, &x) in output.iter_mut().zip(input) {
        let exp_val = (x - max).exp();
        *out = exp_val;
        sum += exp_val;
    }

    // The max entry contributes exp(0) = 1, so sum >= 1 here
    for val in output.iter_mut() {
        *val /= sum;
    }

    Ok(())
}

/// Softmax returning a fresh probability vector
pub fn softmax(input: &[f32]) -> Result<Vec<f32>> {
    let mut output = vec![0.0; input.len()];
    softmax_into(input, &mut output)?;
    Ok(output)
}

/// Divide every logit by `temperature`
pub fn scale_logits(logits: &mut [f32], temperature: f32) -> Result<()> {
    if !temperature.is_finite() || temperature <= 0.0 {
        return Err(Error::InvalidConfig(format!(
            "temperature must be finite and > 0, got {}",
            temperature
        )));
    }
    if temperature == 1.0 {
        return Ok(());
    }
    for x in logits.iter_mut() {
        *x /= temperature;
    }
    Ok(())
}

/// Index of the first maximum
pub fn argmax(values: &[f32]) -> Result<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i).ok_or(Error::EmptyLogits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_softmax() {
        let probs = softmax(&[1.0, 2.0, 3.0]).unwrap();

        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);

        assert!(probs[0] < probs[1]);
        assert!(probs[1] < probs[2]);
    }

    #[test]
    fn test_softmax_uniform() {
        let probs = softmax(&[0.7, 0.7, 0.7]).unwrap();
        for p in probs {
            assert!((p - 1.0 / 3.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_softmax_large_logits_stay_finite() {
        let probs = softmax(&[1000.0, 999.0, -1000.0]).unwrap();
        assert!(probs.iter().all(|p| p.is_finite()));
        assert!((probs.iter().sum::<f32>() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_softmax_errors() {
        assert!(matches!(softmax(&[]), Err(Error::EmptyLogits)));
        assert!(matches!(softmax(&[1.0, f32::NAN]), Err(Error::InvalidDistribution(_))));

        let mut out = vec![0.0; 2];
        assert!(matches!(softmax_into(&[1.0, 2.0, 3.0], &mut out), Err(Error::DimensionMismatch(_))));
    }

    #[test]
    fn test_scale_logits() {
        let mut logits = vec![2.0, -4.0];
        scale_logits(&mut logits, 2.0).unwrap();
        assert_eq!(logits, vec![1.0, -2.0]);

        assert!(scale_logits(&mut logits, 0.0).is_err());
        assert!(scale_logits(&mut logits, f32::INFINITY).is_err());
    }

    #[test]
    fn test_argmax() {
        assert_eq!(argmax(&[1.0, 3.0, 2.0, 5.0, 1.5]).unwrap(), 3);
        // First maximum wins ties
        assert_eq!(argmax(&[4.0, 4.0, 1.0]).unwrap(), 0);
        assert!(matches!(argmax(&[]), Err(Error::EmptyLogits)));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn softmax_is_a_distribution(logits in prop::collection::vec(-50.0f32..50.0, 1..32)) {
                let probs = softmax(&logits).unwrap();
                prop_assert_eq!(probs.len(), logits.len());
                prop_assert!(probs.iter().all(|&p| p >= 0.0));
                prop_assert!((probs.iter().sum::<f32>() - 1.0).abs() < 1e-5);
            }

            #[test]
            fn softmax_is_shift_invariant(
                logits in prop::collection::vec(-20.0f32..20.0, 1..16),
                shift in -100.0f32..100.0,
            ) {
                let base = softmax(&logits).unwrap();
                let shifted: Vec<f32> = logits.iter().map(|x| x + shift).collect();
                let moved = softmax(&shifted).unwrap();
                for (p, q) in base.iter().zip(&moved) {
                    prop_assert!((p - q).abs() < 1e-4);
                }
            }
        }
    }
}

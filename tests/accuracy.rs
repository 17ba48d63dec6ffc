//! Deterministic accuracy sweeps against libm
//!
//! Every kernel is swept over its documented range for both widths and
//! compared with the libm reference at the tolerance listed in `test_utils`.

use quickmath::math::{
    atan_f32, atan_f64, cos_f32, cos_f64, exp_f32, exp_f64, ln_f32, ln_f64, log10_f64, log2_f32,
    log2_f64, pow10_f64, pow2_f32, pow2_f64, pow_f32, pow_f64, sin_f32, sin_f64, sqrt_f32,
    sqrt_f64, tan_f32, tan_f64, tanh_f32, tanh_f64,
};

use test_utils::*;

#[test]
fn test_exp_accuracy_wide_range() {
    for x in sweep(-10.0, 10.0, 2000) {
        assert_relative_eq(exp_f64(x), ref_exp(x), EXP_RELATIVE_TOLERANCE, "exp_f64");

        let xf = x as f32;
        assert_relative_eq(
            exp_f32(xf) as f64,
            ref_exp(xf as f64),
            EXP_RELATIVE_TOLERANCE,
            "exp_f32",
        );
    }
}

#[test]
fn test_exp_accuracy_unit_range() {
    for x in sweep(-1.0, 1.0, 400) {
        assert_relative_eq(exp_f64(x), ref_exp(x), EXP_UNIT_RELATIVE_TOLERANCE_F64, "exp_f64");

        let xf = x as f32;
        assert_relative_eq(
            exp_f32(xf) as f64,
            ref_exp(xf as f64),
            EXP_UNIT_RELATIVE_TOLERANCE_F32,
            "exp_f32",
        );
    }
}

#[test]
fn test_ln_accuracy() {
    for x in log_sweep(1e-30, 1e30, 3000) {
        assert_absolute_eq(ln_f64(x), ref_ln(x), LN_ABSOLUTE_TOLERANCE, "ln_f64");

        let xf = x as f32;
        assert_absolute_eq(ln_f32(xf) as f64, ref_ln(xf as f64), LN_ABSOLUTE_TOLERANCE, "ln_f32");
    }
}

#[test]
fn test_ln_accuracy_near_one() {
    // Inside the approximant's band without any scaling step
    for x in sweep(0.51, 5.99, 500) {
        assert_absolute_eq(ln_f64(x), ref_ln(x), 5e-4, "ln_f64 band");
    }
}

#[test]
fn test_log2_log10_accuracy() {
    for x in log_sweep(1e-6, 1e6, 1000) {
        assert_absolute_eq(log2_f64(x), libm::log2(x), 1e-3, "log2_f64");
        assert_absolute_eq(log2_f32(x as f32) as f64, libm::log2(x), 1e-3, "log2_f32");
        assert_absolute_eq(log10_f64(x), libm::log10(x), 1e-3, "log10_f64");
    }
}

#[test]
fn test_pow2_fractional_accuracy() {
    for x in sweep(-12.0, 12.0, 997) {
        let reference = libm::exp2(x);
        assert_relative_eq(pow2_f64(x), reference, EXP_RELATIVE_TOLERANCE, "pow2_f64");
        assert_relative_eq(
            pow2_f32(x as f32) as f64,
            libm::exp2((x as f32) as f64),
            EXP_RELATIVE_TOLERANCE,
            "pow2_f32",
        );
    }
}

#[test]
fn test_pow10_fractional_accuracy() {
    for x in sweep(-4.0, 4.0, 397) {
        let reference = ref_pow(10.0, x);
        assert_relative_eq(pow10_f64(x), reference, EXP_RELATIVE_TOLERANCE, "pow10_f64");
    }
}

#[test]
fn test_pow_accuracy_grid() {
    for base in sweep(0.5, 10.0, 39) {
        for exponent in sweep(-3.0, 3.0, 24) {
            let reference = ref_pow(base, exponent);
            let context = "pow_f64";
            assert_relative_eq(pow_f64(base, exponent), reference, POW_RELATIVE_TOLERANCE, context);

            let (bf, ef) = (base as f32, exponent as f32);
            assert_relative_eq(
                pow_f32(bf, ef) as f64,
                ref_pow(bf as f64, ef as f64),
                POW_RELATIVE_TOLERANCE,
                "pow_f32",
            );
        }
    }
}

#[test]
fn test_sqrt_accuracy() {
    for x in log_sweep(1e-20, 1e20, 4000) {
        assert_relative_eq(sqrt_f64(x), libm::sqrt(x), SQRT_RELATIVE_TOLERANCE, "sqrt_f64");

        let xf = x as f32;
        assert_relative_eq(
            sqrt_f32(xf) as f64,
            libm::sqrt(xf as f64),
            SQRT_RELATIVE_TOLERANCE,
            "sqrt_f32",
        );
    }
}

#[test]
fn test_cos_sin_accuracy() {
    for x in sweep(-100.0, 100.0, 20_000) {
        assert_absolute_eq(cos_f64(x), ref_cos(x), TRIG_ABSOLUTE_TOLERANCE_F64, "cos_f64");
        assert_absolute_eq(sin_f64(x), ref_sin(x), TRIG_ABSOLUTE_TOLERANCE_F64, "sin_f64");
    }
    for x in sweep(-10.0, 10.0, 2_000) {
        let xf = x as f32;
        let reference = xf as f64;
        assert_absolute_eq(
            cos_f32(xf) as f64,
            ref_cos(reference),
            TRIG_ABSOLUTE_TOLERANCE_F32,
            "cos_f32",
        );
        assert_absolute_eq(
            sin_f32(xf) as f64,
            ref_sin(reference),
            TRIG_ABSOLUTE_TOLERANCE_F32,
            "sin_f32",
        );
    }
}

#[test]
fn test_tan_accuracy_away_from_poles() {
    for x in sweep(-20.0, 20.0, 4001) {
        if ref_cos(x).abs() <= 0.1 {
            continue;
        }
        assert_scaled_eq(tan_f64(x), ref_tan(x), 1e-10, "tan_f64");
    }
    for x in sweep(-6.0, 6.0, 1201) {
        let xf = x as f32;
        let reference = xf as f64;
        if ref_cos(reference).abs() <= 0.1 {
            continue;
        }
        assert_scaled_eq(tan_f32(xf) as f64, ref_tan(reference), 1e-4, "tan_f32");
    }
}

#[test]
fn test_atan_accuracy() {
    for x in sweep(-1000.0, 1000.0, 20_000) {
        assert_absolute_eq(atan_f64(x), ref_atan(x), 1e-13, "atan_f64");
        let xf = x as f32;
        assert_absolute_eq(atan_f32(xf) as f64, ref_atan(xf as f64), 1e-6, "atan_f32");
    }
    for x in sweep(-2.0, 2.0, 4000) {
        assert_absolute_eq(atan_f64(x), ref_atan(x), 1e-13, "atan_f64 core");
    }
}

#[test]
fn test_tanh_accuracy() {
    for x in sweep(-3.0, 3.0, 600) {
        assert_absolute_eq(tanh_f64(x), ref_tanh(x), TANH_ABSOLUTE_TOLERANCE, "tanh_f64");
        let xf = x as f32;
        assert_absolute_eq(
            tanh_f32(xf) as f64,
            ref_tanh(xf as f64),
            TANH_ABSOLUTE_TOLERANCE,
            "tanh_f32",
        );
    }
}

#[test]
fn test_tanh_drift_beyond_fit() {
    // Outside [-3, 3] the fit is not clamped; error stays bounded by ~1.2e-3 up to |x| = 4
    for x in sweep(-4.0, 4.0, 800) {
        assert_absolute_eq(tanh_f64(x), ref_tanh(x), 2e-3, "tanh_f64 drift");
    }
}

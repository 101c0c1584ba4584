use crate::workspace::Segment;

/// A sample point at which the integrand returned a non-finite value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NonFiniteSample {
    pub x: f64,
}

/// An embedded Gauss-Kronrod rule pair.
///
/// Each pair evaluates a fixed-order Kronrod rule together with its embedded
/// Gauss rule on the same sample points. The Kronrod sum is the integral
/// estimate; the discrepancy between the two sums bounds the local error
/// without any extra evaluations of the integrand.
///
/// The exact rule order is a tunable choice, not a compatibility contract.
/// The 7/15 pair is a good default for smooth integrands; the 15/31 pair
/// trades more evaluations per segment for a sharper error estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rule {
    /// 7-point Gauss rule embedded in a 15-point Kronrod rule.
    #[default]
    GaussKronrod15,
    /// 15-point Gauss rule embedded in a 31-point Kronrod rule.
    GaussKronrod31,
}

impl Rule {
    /// Evaluates the embedded pair over `[left, right]`.
    ///
    /// Returns the segment estimate, or the abscissa at which the integrand
    /// produced a non-finite value.
    pub(crate) fn evaluate<F>(
        self,
        f: &F,
        left: f64,
        right: f64,
    ) -> Result<Segment, NonFiniteSample>
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Rule::GaussKronrod15 => evaluate_pair(f, left, right, &XGK_15, &WGK_15, &WG_7),
            Rule::GaussKronrod31 => evaluate_pair(f, left, right, &XGK_31, &WGK_31, &WG_15),
        }
    }

    /// Number of integrand evaluations per segment.
    pub fn points(self) -> usize {
        match self {
            Rule::GaussKronrod15 => 15,
            Rule::GaussKronrod31 => 31,
        }
    }
}

/// Applies an embedded pair whose tables list only the non-negative half of
/// the symmetric abscissae, with the Gauss nodes sitting at even indices.
fn evaluate_pair<F>(
    f: &F,
    left: f64,
    right: f64,
    xgk: &[f64],
    wgk: &[f64],
    wg: &[f64],
) -> Result<Segment, NonFiniteSample>
where
    F: Fn(f64) -> f64,
{
    let center = 0.5 * (left + right);
    let half_width = 0.5 * (right - left);

    // The center abscissa belongs to both rules.
    let f_center = sample(f, center)?;
    let mut kronrod = wgk[0] * f_center;
    let mut gauss = wg[0] * f_center;

    for (i, &x) in xgk.iter().enumerate().skip(1) {
        let offset = half_width * x;
        let pair = sample(f, center - offset)? + sample(f, center + offset)?;
        kronrod += wgk[i] * pair;
        if i % 2 == 0 {
            gauss += wg[i / 2] * pair;
        }
    }

    Ok(Segment {
        left,
        right,
        integral: half_width * kronrod,
        error: (half_width * (kronrod - gauss)).abs(),
    })
}

fn sample<F>(f: &F, x: f64) -> Result<f64, NonFiniteSample>
where
    F: Fn(f64) -> f64,
{
    let value = f(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NonFiniteSample { x })
    }
}

// Abscissae and weights below are the published QUADPACK tables, listed for
// the non-negative half of each symmetric rule. Kronrod nodes at even
// indices coincide with the nodes of the embedded Gauss rule.

/// Abscissae of the 15-point Kronrod rule.
const XGK_15: [f64; 8] = [
    0.0,
    0.207_784_955_007_898_467_600_689_403_773_245,
    0.405_845_151_377_397_166_906_606_412_076_961,
    0.586_087_235_467_691_130_294_144_838_258_730,
    0.741_531_185_599_394_439_863_864_773_280_788,
    0.864_864_423_359_769_072_789_712_788_640_926,
    0.949_107_912_342_758_524_526_189_684_047_851,
    0.991_455_371_120_812_639_206_854_697_526_329,
];

/// Weights of the 15-point Kronrod rule.
const WGK_15: [f64; 8] = [
    0.209_482_141_084_727_828_012_999_174_891_714,
    0.204_432_940_075_298_892_414_161_999_234_649,
    0.190_350_578_064_785_409_913_256_402_421_014,
    0.169_004_726_639_267_902_826_583_426_598_550,
    0.140_653_259_715_525_918_745_189_590_510_238,
    0.104_790_010_322_250_183_839_876_322_541_518,
    0.063_092_092_629_978_553_290_700_663_189_204,
    0.022_935_322_010_529_224_963_732_008_058_970,
];

/// Weights of the embedded 7-point Gauss rule.
const WG_7: [f64; 4] = [
    0.417_959_183_673_469_387_755_102_040_816_327,
    0.381_830_050_505_118_944_950_369_775_488_975,
    0.279_705_391_489_276_667_901_467_771_423_780,
    0.129_484_966_168_869_693_270_611_432_679_082,
];

/// Abscissae of the 31-point Kronrod rule.
const XGK_31: [f64; 16] = [
    0.0,
    0.101_142_066_918_717_499_027_074_231_447_392,
    0.201_194_093_997_434_522_300_628_303_394_596,
    0.299_180_007_153_168_812_166_780_024_266_389,
    0.394_151_347_077_563_369_897_207_370_981_045,
    0.485_081_863_640_239_680_693_655_740_232_351,
    0.570_972_172_608_538_847_537_226_737_253_911,
    0.650_996_741_297_416_970_533_735_895_313_275,
    0.724_417_731_360_170_047_416_186_054_613_938,
    0.790_418_501_442_465_932_967_649_294_817_947,
    0.848_206_583_410_427_216_200_648_320_774_217,
    0.897_264_532_344_081_900_882_509_656_454_496,
    0.937_273_392_400_705_904_307_758_947_710_209,
    0.967_739_075_679_139_134_257_347_978_784_337,
    0.987_992_518_020_485_428_489_565_718_586_613,
    0.998_002_298_693_397_060_285_172_840_152_271,
];

/// Weights of the 31-point Kronrod rule.
const WGK_31: [f64; 16] = [
    0.101_330_389_185_927_371_339_204_261_356_068,
    0.100_769_845_523_875_595_044_946_662_617_570,
    0.099_173_598_721_791_959_332_393_173_484_603,
    0.096_540_088_514_727_800_566_764_830_063_574,
    0.092_890_152_315_699_803_921_039_684_004_823,
    0.088_249_690_258_459_978_979_223_423_552_586,
    0.082_657_391_562_164_879_555_039_267_349_939,
    0.076_161_532_664_740_203_930_229_506_729_174,
    0.068_815_689_566_097_685_801_562_319_058_107,
    0.060_681_096_056_449_666_668_363_461_936_895,
    0.051_821_051_653_556_811_146_729_268_673_829,
    0.042_308_890_507_798_671_072_498_148_909_301,
    0.032_217_097_551_918_635_038_351_508_860_247,
    0.021_630_274_268_698_722_668_151_940_168_321,
    0.010_612_064_029_110_718_618_802_830_511_873,
    0.003_073_583_718_520_531_501_218_293_246_031,
];

/// Weights of the embedded 15-point Gauss rule.
const WG_15: [f64; 8] = [
    0.202_578_241_925_561_272_880_620_199_967_519,
    0.198_431_485_327_111_576_456_118_326_443_839,
    0.186_161_000_015_562_211_026_800_561_866_423,
    0.166_269_205_816_993_933_553_200_860_481_209,
    0.139_570_677_926_154_314_447_804_794_511_028,
    0.107_159_220_467_171_935_011_869_546_685_869,
    0.070_366_047_488_108_124_709_267_416_450_667,
    0.030_753_241_996_117_268_354_628_393_577_204,
];

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    fn evaluate(rule: Rule, f: impl Fn(f64) -> f64, left: f64, right: f64) -> Segment {
        rule.evaluate(&f, left, right).expect("finite integrand")
    }

    #[test]
    fn kronrod_15_is_exact_on_low_degree_polynomials() {
        // The 7-point Gauss component is exact through degree 13, so the
        // error estimate collapses to floating-point noise.
        let segment = evaluate(Rule::GaussKronrod15, |x| x * x * x, 0.0, 1.0);
        assert_relative_eq!(segment.integral, 0.25, epsilon = 1e-14);
        assert!(segment.error < 1e-14);

        let segment = evaluate(Rule::GaussKronrod15, |x| x.powi(13), 0.0, 2.0);
        assert_relative_eq!(
            segment.integral,
            f64::powi(2.0, 14) / 14.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn kronrod_15_integrates_sine() {
        let segment = evaluate(Rule::GaussKronrod15, f64::sin, 0.0, PI);
        assert_relative_eq!(segment.integral, 2.0, epsilon = 1e-12);
        assert!(segment.error > 0.0, "sine is not a polynomial");
    }

    #[test]
    fn kronrod_31_integrates_exponential() {
        let segment = evaluate(Rule::GaussKronrod31, f64::exp, 0.0, 1.0);
        assert_relative_eq!(segment.integral, std::f64::consts::E - 1.0, epsilon = 1e-14);
    }

    #[test]
    fn rules_agree_on_a_smooth_integrand() {
        let coarse = evaluate(Rule::GaussKronrod15, |x| (-x * x).exp(), -1.0, 1.0);
        let fine = evaluate(Rule::GaussKronrod31, |x| (-x * x).exp(), -1.0, 1.0);
        assert_relative_eq!(coarse.integral, fine.integral, epsilon = 1e-10);
    }

    #[test]
    fn reports_the_non_finite_abscissa() {
        let result = Rule::GaussKronrod15.evaluate(&|x: f64| x.ln(), -1.0, 1.0);
        let sample = result.expect_err("log is not finite at the center");
        assert_relative_eq!(sample.x, 0.0);
    }

    #[test]
    fn points_match_the_rule_order() {
        assert_eq!(Rule::GaussKronrod15.points(), 15);
        assert_eq!(Rule::GaussKronrod31.points(), 31);
    }
}

use rand::{Rng, SeedableRng as _, seq::SliceRandom};
use rand_distr::Normal;
use rand_pcg::Pcg32;
use sickday_analysis::{
    AnalysisError,
    engine::HypothesisEngine,
    grouping::{self, FilterCriterion, GroupingMode},
    record::{Record, Sex},
    selection::TestChoice,
};
use sickday_stats::{descriptive::mean, variance::LeveneCenter};

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_to_count(value: f64, max: f64) -> u32 {
    value.clamp(0.0, max).round() as u32
}

/// Builds records for the given sick-day counts, shuffled and with random ages.
fn synthetic_records(rng: &mut Pcg32, men: &[u32], women: &[u32]) -> Vec<Record> {
    let ages = Normal::new(40.0, 12.0).unwrap();
    let mut records = men
        .iter()
        .map(|&d| (d, Sex::Male))
        .chain(women.iter().map(|&d| (d, Sex::Female)))
        .map(|(days, sex)| {
            let age = round_to_count(rng.sample(ages), 70.0).max(18);
            Record::new(days, sex, age)
        })
        .collect::<Vec<_>>();
    records.shuffle(rng);
    records
}

fn assert_direction(statistic: f64, men: &[u32], women: &[u32]) {
    let to_f64 = |v: &[u32]| v.iter().copied().map(f64::from).collect::<Vec<_>>();
    let diff = mean(&to_f64(men)) - mean(&to_f64(women));
    assert_eq!(statistic.signum(), diff.signum(), "t = {statistic}, diff = {diff}");
}

#[test]
fn test_unequal_spread_takes_welch_path() {
    let men = [2, 3, 3, 4, 4, 3, 2, 3, 4, 5];
    let women = [0, 0, 1, 2, 3, 4, 5, 6, 6, 3];
    let mut rng = Pcg32::seed_from_u64(42);
    let records = synthetic_records(&mut rng, &men, &women);

    let engine = HypothesisEngine::new(LeveneCenter::Median);
    let report = engine
        .analyze(&records, FilterCriterion::new(-1), GroupingMode::BySex)
        .unwrap();

    let result = report.result;
    assert!(result.normality_p_values.0 > 0.05);
    assert!(result.normality_p_values.1 > 0.05);
    let variance_p = result.variance_p_value.unwrap();
    assert!(variance_p < 0.05);
    assert_eq!(result.test_used, TestChoice::WelchTTest);
    assert_direction(result.statistic, &men, &women);
    assert!(!result.is_significant(0.05));

    assert_eq!(report.group_a.stats.unwrap().len, 10);
    assert_eq!(report.group_b.stats.unwrap().len, 10);
}

#[test]
fn test_similar_spread_takes_pooled_path() {
    let men = [2, 3, 3, 4, 4, 3, 2, 3, 4, 5];
    let women = [0, 1, 2, 3, 4, 4, 5, 6, 2, 3];
    let mut rng = Pcg32::seed_from_u64(7);
    let records = synthetic_records(&mut rng, &men, &women);

    let engine = HypothesisEngine::new(LeveneCenter::Median);
    let report = engine
        .analyze(&records, FilterCriterion::new(-1), GroupingMode::BySex)
        .unwrap();

    let result = report.result;
    assert!(result.variance_p_value.unwrap() > 0.05);
    assert_eq!(result.test_used, TestChoice::PooledTTest);
    assert_direction(result.statistic, &men, &women);
}

#[test]
fn test_outliers_take_mann_whitney_path() {
    let men = [1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 3, 50];
    let women = [1, 2, 3, 4, 5, 2, 3, 4, 3, 1];
    let mut rng = Pcg32::seed_from_u64(3);
    let records = synthetic_records(&mut rng, &men, &women);

    let report = HypothesisEngine::new(LeveneCenter::Median)
        .analyze(&records, FilterCriterion::new(0), GroupingMode::BySex)
        .unwrap();

    assert_eq!(report.result.test_used, TestChoice::MannWhitneyU);
    assert_eq!(report.result.variance_p_value, None);
    assert!((0.0..=1.0).contains(&report.result.p_value));
}

#[test]
fn test_filter_can_leave_a_group_too_small() {
    let men = [1, 1, 2, 9];
    let women = [4, 5, 6, 7, 8];
    let mut rng = Pcg32::seed_from_u64(11);
    let records = synthetic_records(&mut rng, &men, &women);

    let err = HypothesisEngine::new(LeveneCenter::Median)
        .analyze(&records, FilterCriterion::new(2), GroupingMode::BySex)
        .unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::InsufficientSample { ref label, .. } if label == "Men"
    ));
}

#[test]
fn test_random_age_grouping_is_consistent() {
    let mut rng = Pcg32::seed_from_u64(2024);
    let sick_days = Normal::new(6.0, 2.5).unwrap();
    let counts = (0..40)
        .map(|_| round_to_count(rng.sample(sick_days), 30.0))
        .collect::<Vec<_>>();
    let records = synthetic_records(&mut rng, &counts[..20], &counts[20..]);

    let filter = FilterCriterion::new(1);
    let mode = GroupingMode::ByAge { threshold: 40 };
    let (adults, young) = grouping::group(&records, filter, mode);
    let eligible = records.iter().filter(|r| filter.is_eligible(r)).count();
    assert_eq!(adults.len() + young.len(), eligible);

    match HypothesisEngine::new(LeveneCenter::Mean).analyze(&records, filter, mode) {
        Ok(report) => {
            let result = report.result;
            assert_eq!(result.variance_p_value.is_some(), result.test_used.is_t_test());
            assert!((0.0..=1.0).contains(&result.p_value));
            assert_eq!(report.group_a.label, "Adults");
            assert_eq!(report.group_b.label, "Young");
        }
        Err(err) => assert!(
            matches!(
                err,
                AnalysisError::InsufficientSample { .. } | AnalysisError::DegenerateSample { .. }
            ),
            "{err}"
        ),
    }
}

use anyhow::Result;
use rlkit::{
    logger::{MetricsLogger, Reducer, SummaryQuery},
    RlkitError,
};

#[test]
fn test_reward_mean_example() -> Result<()> {
    let mut logger: MetricsLogger = MetricsLogger::new();
    logger.add_attribute("reward", Reducer::mean())?;

    for v in [1.0, 2.0, 3.0] {
        logger.put("reward", v)?;
    }
    let summary = logger.summarize(&SummaryQuery::default())?;
    assert_eq!(summary.to_string(), "reward_mean=2.0000");

    logger.put("reward", 5.0)?;
    let summary = logger.summarize(&SummaryQuery::default())?;
    assert_eq!(summary.to_string(), "reward_mean=5.0000");

    let summary = logger.summarize(&SummaryQuery::default().from_beginning(true))?;
    assert_eq!(summary.to_string(), "reward_mean=2.7500");
    Ok(())
}

#[test]
fn test_raw_pairs() -> Result<()> {
    let mut logger: MetricsLogger = MetricsLogger::new();
    logger.add_attribute("loss", vec![Reducer::min(), Reducer::max(), Reducer::median()])?;
    for v in [0.5, 0.25, 1.0] {
        logger.put("loss", v)?;
    }
    let pairs = logger.summarize(&SummaryQuery::default())?.into_pairs();
    assert_eq!(
        pairs,
        vec![
            ("loss_min".to_string(), 0.25),
            ("loss_max".to_string(), 1.0),
            ("loss_median".to_string(), 0.5),
        ]
    );
    Ok(())
}

#[test]
fn test_second_incremental_summary_sees_empty_window() -> Result<()> {
    let mut logger: MetricsLogger = MetricsLogger::new();
    logger.add_attribute("reward", vec![Reducer::<f32>::count(), Reducer::sum()])?;
    logger.put("reward", 1.0)?;
    logger.put("reward", 2.0)?;

    let first = logger.summarize(&SummaryQuery::default())?;
    assert_eq!(first.get("reward_count"), Some(2.0));
    let second = logger.summarize(&SummaryQuery::default())?;
    assert_eq!(second.get("reward_count"), Some(0.0));
    assert_eq!(second.get("reward_sum"), Some(0.0));

    let full = logger.summarize(&SummaryQuery::default().from_beginning(true))?;
    assert_eq!(full.get("reward_sum"), Some(3.0));
    Ok(())
}

#[test]
fn test_errors() -> Result<()> {
    let mut logger: MetricsLogger = MetricsLogger::new();
    logger.add_attribute("reward", Reducer::mean())?;

    assert!(matches!(
        logger.add_attribute("reward", Reducer::max()),
        Err(RlkitError::DuplicateAttribute(name)) if name == "reward"
    ));
    assert!(matches!(
        logger.put("return", 1.0),
        Err(RlkitError::UnknownAttribute(name)) if name == "return"
    ));
    assert!(matches!(
        logger.summarize(&SummaryQuery::default().attributes(["return"])),
        Err(RlkitError::UnknownAttribute(_))
    ));
    Ok(())
}

#[test]
fn test_reset_allows_reregistration() -> Result<()> {
    let mut logger: MetricsLogger = MetricsLogger::new();
    logger.add_attribute("reward", Reducer::mean())?;
    logger.put("reward", 10.0)?;
    logger.summarize(&SummaryQuery::default())?;

    logger.reset();
    logger.add_attribute("reward", Reducer::max())?;
    logger.put("reward", 1.0)?;

    let summary = logger.summarize(&SummaryQuery::default().from_beginning(true))?;
    assert_eq!(summary.to_string(), "reward_max=1.0000");
    Ok(())
}

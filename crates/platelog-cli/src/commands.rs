//! Command implementations. Input and output are passed in so the
//! interactive flow can be driven from tests.

use std::io::{BufRead, Write};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::warn;

use platelog_core::PlatelogConfig;
use platelog_estimate::{EstimationResult, FoodDictionary, MealEstimator};
use platelog_resolve::{ResolutionSession, SubmitOutcome};
use platelog_store::{CaloriesLog, KeyValueStore, MealLog, MealSlot};

/// Everything a command needs.
pub struct Context {
    pub config: PlatelogConfig,
    pub store: Arc<dyn KeyValueStore>,
}

impl Context {
    pub fn new(config: PlatelogConfig, store: Arc<dyn KeyValueStore>) -> Self {
        Self { config, store }
    }

    fn estimator(&self) -> MealEstimator {
        MealEstimator::new(FoodDictionary::new(self.store.clone()))
            .with_max_unknown(self.config.max_unknown)
    }
}

/// Read a calorie answer the way a form field would: leading integer,
/// anything after it ignored. `None` when there is no number at all.
pub fn parse_calories(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<f64>().ok().map(|n| sign * n)
}

/// Estimate the day's meals, resolve unknown foods over `input`, print the
/// per-segment breakdown and record the rounded total.
pub fn estimate(
    ctx: &Context,
    date: NaiveDate,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let meals = MealLog::new(ctx.store.as_ref()).texts_for(date)?;
    let estimator = ctx.estimator();
    let first = estimator.estimate(&meals, true)?;

    let result = if first.has_unknown_foods() {
        let mut session = ResolutionSession::new(estimator);
        session.start(meals, first.unknown_foods);
        match resolve_interactively(&mut session, input, out)? {
            Some(result) => result,
            None => {
                writeln!(out, "Calcul annulé.")?;
                return Ok(());
            }
        }
    } else {
        first
    };

    print_breakdown(&result, out)?;
    let total = result.rounded_total();
    CaloriesLog::new(ctx.store.as_ref()).record(date, total)?;
    writeln!(out, "Calories du jour : {} kcal (estimation)", total)?;
    Ok(())
}

fn print_breakdown(result: &EstimationResult, out: &mut dyn Write) -> anyhow::Result<()> {
    for seg in &result.segments {
        match &seg.matched_food {
            Some(food) => writeln!(
                out,
                "  {:<9} {:<28} {} x{} = {} kcal",
                seg.slot.label(),
                seg.segment,
                food,
                seg.quantity,
                seg.calories
            )?,
            None => writeln!(out, "  {:<9} {:<28} ?", seg.slot.label(), seg.segment)?,
        }
    }
    Ok(())
}

/// Prompt until every food has a value. `None` if the user cancels (blank
/// line, `q`, or end of input).
fn resolve_interactively(
    session: &mut ResolutionSession,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> anyhow::Result<Option<EstimationResult>> {
    loop {
        let prompt = match session.prompt() {
            Some(p) => p,
            None => return Ok(None),
        };
        writeln!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line)?;
        let answer = line.trim();
        if read == 0 || answer.is_empty() || answer.eq_ignore_ascii_case("q") {
            session.cancel()?;
            return Ok(None);
        }

        let value = match parse_calories(answer) {
            Some(v) => v,
            None => {
                writeln!(out, "Merci de saisir un nombre de calories positif.")?;
                continue;
            }
        };
        match session.submit(value) {
            Ok(SubmitOutcome::Next(_)) => continue,
            Ok(SubmitOutcome::Resolved(result)) => return Ok(Some(result)),
            Err(e) if e.is_validation() => {
                warn!("Rejected calorie value: {}", e);
                writeln!(out, "Merci de saisir un nombre de calories positif.")?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Record the day's calories typed by hand, replacing any estimate.
pub fn record_calories(
    ctx: &Context,
    date: NaiveDate,
    value: &str,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let calories = match parse_calories(value) {
        Some(v) => v as i64,
        None => anyhow::bail!(
            "Merci de saisir un nombre de calories valide (ou utilise le calcul automatique)."
        ),
    };
    CaloriesLog::new(ctx.store.as_ref()).record(date, calories)?;
    writeln!(out, "Calories du jour : {} kcal", calories)?;
    Ok(())
}

pub fn save_meal(
    ctx: &Context,
    date: NaiveDate,
    slot: MealSlot,
    text: &str,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    MealLog::new(ctx.store.as_ref()).save(date, slot, text)?;
    writeln!(out, "Saved {} for {}", slot.label(), date)?;
    Ok(())
}

pub fn learn(ctx: &Context, name: &str, kcal: f64, out: &mut dyn Write) -> anyhow::Result<()> {
    let name = platelog_estimate::normalize(name);
    FoodDictionary::new(ctx.store.clone()).learn(&name, kcal)?;
    writeln!(out, "{} = {} kcal / portion", name, kcal)?;
    Ok(())
}

pub fn list_foods(ctx: &Context, out: &mut dyn Write) -> anyhow::Result<()> {
    let dictionary = FoodDictionary::new(ctx.store.clone());
    let learned = dictionary.learned()?;
    for (name, kcal) in dictionary.build()? {
        let marker = if learned.contains_key(&name) { "*" } else { " " };
        writeln!(out, "{} {:<24} {:>6} kcal", marker, name, kcal)?;
    }
    writeln!(out, "({} learned)", learned.len())?;
    Ok(())
}

pub fn export(ctx: &Context, out: &mut dyn Write) -> anyhow::Result<()> {
    let path = platelog_store::write_export(ctx.store.as_ref(), &ctx.config.data_paths.exports)?;
    writeln!(out, "{}", path.display())?;
    Ok(())
}

use std::fmt;

use epa::{Prediction, RatingStore, TeamNumber};

/// Right aligned `team_id` / `epa` table.
#[derive(Debug, Clone, Copy)]
pub struct RatingTable<'a>(pub &'a [(TeamNumber, f64)]);

impl fmt::Display for RatingTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ratings: Vec<String> = self.0.iter().map(|(_, epa)| format!("{epa:.2}")).collect();
        let team_width = self
            .0
            .iter()
            .map(|(team, _)| team.to_string().len())
            .chain(std::iter::once("team_id".len()))
            .max()
            .unwrap_or_default();
        let epa_width = ratings
            .iter()
            .map(String::len)
            .chain(std::iter::once("epa".len()))
            .max()
            .unwrap_or_default();

        write!(f, "{:>team_width$}  {:>epa_width$}", "team_id", "epa")?;
        for ((team, _), epa) in self.0.iter().zip(&ratings) {
            write!(f, "\n{team:>team_width$}  {epa:>epa_width$}")?;
        }
        Ok(())
    }
}

/// Full rating table, in the order teams were first rated.
pub fn final_scores(store: &RatingStore) -> String {
    format!("Final EPA Scores:\n{}", RatingTable(store.entries()))
}

/// The `n` best teams, best first.
pub fn top_teams(store: &RatingStore, n: usize) -> String {
    let top = store.top(n);
    format!("Top {n} Teams by EPA:\n{}", RatingTable(&top))
}

#[derive(Debug, Clone, Copy)]
pub struct PredictionReport<'a>(pub &'a Prediction);

impl fmt::Display for PredictionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prediction = self.0;
        writeln!(f, "Match Prediction:")?;
        writeln!(f, "Predicted Red Score: {:.2}", prediction.red_score)?;
        writeln!(f, "Predicted Blue Score: {:.2}", prediction.blue_score)?;
        writeln!(
            f,
            "Red Win Probability: {:.2}%",
            prediction.red_win_probability * 100.0
        )?;
        writeln!(
            f,
            "Blue Win Probability: {:.2}%",
            prediction.blue_win_probability * 100.0
        )?;
        write!(f, "Predicted Winner: {}", prediction.winner)
    }
}

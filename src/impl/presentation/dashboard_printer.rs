use crate::{
    domain::logic::selection::sorted_by_display_name,
    entities::{CompaniesState, PeriodData},
};

use super::{
    chart_series::RADAR_ORDER,
    utils::{format_market_cap, or_dash, trend_arrow},
};

const TEXT_WIDTH: usize = 72;

pub(crate) struct DashboardPrinter;

impl DashboardPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Company names in display order; the current one is marked with '>'.
    pub(crate) fn print_sidebar(&self, state: &CompaniesState) -> String {
        let current_id = state.current().map(|c| &c.id);
        let mut output = String::new();
        for company in sorted_by_display_name(state.entities()) {
            let marker = if Some(&company.id) == current_id { '>' } else { ' ' };
            output.push_str(&format!(
                "{} {}  [{}]\n",
                marker,
                company.display_name(),
                company.id
            ));
        }
        output
    }

    pub(crate) fn print_current(&self, state: &CompaniesState) -> String {
        let (company, period) = match (state.current(), state.current_period()) {
            (Some(company), Some(period)) => (company, period),
            _ => return "No data available\n".to_string(),
        };
        let mut output = String::new();
        let title = format!("{} ({})", company.display_name(), state.view_mode());
        output.push_str(&format!("{}\n{}\n\n", title, "=".repeat(title.chars().count())));
        self.print_details(&mut output, period);
        self.print_metrics(&mut output, period);
        self.print_steering_indices(&mut output, period);
        self.print_recent_changes(&mut output, period);
        self.print_risks(&mut output, period);
        output
    }

    fn print_details(&self, output: &mut String, period: &PeriodData) {
        let details = &period.details;
        output.push_str(&format!("ISIN:                  {}\n", or_dash(&details.isin)));
        output.push_str(&format!("Industry:              {}\n", or_dash(&details.sector.name)));
        output.push_str(&format!(
            "Place of Exchange:     {}\n",
            or_dash(&details.place_of_exchange)
        ));
        output.push_str(&format!(
            "Market Capitalization: {}\n\n",
            format_market_cap(details.market_capitalization)
        ));
    }

    fn print_metrics(&self, output: &mut String, period: &PeriodData) {
        let sector = &period.details.sector;
        output.push_str(&format!(
            "UCO1: {:<12} UCO2: {}\n",
            or_dash(&period.uco1),
            or_dash(&period.uco2)
        ));
        output.push_str(&format!("Z1:   {:<12} (sector mean {})\n", period.z1, sector.z1_mean));
        output.push_str(&format!("Z2:   {:<12} (sector mean {})\n", period.z2, sector.z2_mean));
        output.push_str(&format!("Data: {}\n\n", or_dash(&period.data)));
    }

    fn print_steering_indices(&self, output: &mut String, period: &PeriodData) {
        output.push_str("Steering indices        score   sector\n");
        for (position, kind) in RADAR_ORDER.iter().enumerate() {
            let index = period.steering_indices.get(*kind);
            output.push_str(&format!(
                "  {} {}. {:<18} {:>6} {:>8}\n",
                trend_arrow(index.trends),
                position + 1,
                kind.name(),
                index.score,
                period.details.sector.steering_indices.get(*kind),
            ));
        }
        output.push('\n');
    }

    fn print_recent_changes(&self, output: &mut String, period: &PeriodData) {
        output.push_str("Recent Changes\n");
        for line in textwrap::wrap(or_dash(&period.recent_changes), TEXT_WIDTH - 2) {
            output.push_str(&format!("  {}\n", line));
        }
        output.push_str(&format!("Liquidity: {} %\n", period.liquidity));
        output.push_str(&format!("Group:     {}\n\n", or_dash(&period.group)));
    }

    fn print_risks(&self, output: &mut String, period: &PeriodData) {
        output.push_str("Risks\n");
        output.push_str(&format!("  Value At Risk: {}\n", period.risks.value_at_risk));
        output.push_str(&format!("  CE:            {}\n", period.risks.ce));
    }
}

use crate::entities::{PeriodData, SteeringIndexKind, TrendDirection};

/// Axis order of the steering-indices radar.
pub const RADAR_ORDER: [SteeringIndexKind; 5] = [
    SteeringIndexKind::Environment,
    SteeringIndexKind::Social,
    SteeringIndexKind::Controversies,
    SteeringIndexKind::Leverage,
    SteeringIndexKind::Profitability,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// Z1/Z2 position of the company against its sector mean.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub company: ScatterPoint,
    pub sector_mean: ScatterPoint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub company_label: String,
    pub labels: [&'static str; 5],
    pub sector_mean: [f64; 5],
    pub company: [f64; 5],
    pub trends: [TrendDirection; 5],
}

pub(crate) fn scatter_series(period: &PeriodData) -> ScatterSeries {
    ScatterSeries {
        company: ScatterPoint {
            x: period.z1,
            y: period.z2,
        },
        sector_mean: ScatterPoint {
            x: period.details.sector.z1_mean,
            y: period.details.sector.z2_mean,
        },
    }
}

pub(crate) fn radar_series(company_name: &str, period: &PeriodData) -> RadarSeries {
    let label = if company_name.trim().is_empty() {
        "Company"
    } else {
        company_name
    };
    RadarSeries {
        company_label: label.to_string(),
        labels: RADAR_ORDER.map(|k| k.name()),
        sector_mean: RADAR_ORDER.map(|k| period.details.sector.steering_indices.get(k)),
        company: RADAR_ORDER.map(|k| period.steering_indices.get(k).score),
        trends: RADAR_ORDER.map(|k| period.steering_indices.get(k).trends),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period() -> PeriodData {
        let mut p = PeriodData::default();
        p.z1 = 0.61;
        p.z2 = 0.34;
        p.details.sector.z1_mean = 0.5;
        p.details.sector.z2_mean = 0.45;
        p.details.sector.steering_indices.environment = 70.0;
        p.details.sector.steering_indices.profitability = 110.0;
        p.steering_indices.environment.score = 85.0;
        p.steering_indices.environment.trends = TrendDirection::Up;
        p.steering_indices.profitability.score = 95.0;
        p.steering_indices.profitability.trends = TrendDirection::Down;
        p
    }

    #[test]
    fn test_scatter_series() {
        let s = scatter_series(&period());
        assert_eq!(s.company, ScatterPoint { x: 0.61, y: 0.34 });
        assert_eq!(s.sector_mean, ScatterPoint { x: 0.5, y: 0.45 });
    }

    #[test]
    fn test_radar_series_follows_radar_order() {
        let r = radar_series("Vallourec SA", &period());
        assert_eq!(
            r.labels,
            ["Environment", "Social", "Controversies", "Leverage", "Profitability"]
        );
        assert_eq!(r.sector_mean, [70.0, 0.0, 0.0, 0.0, 110.0]);
        assert_eq!(r.company, [85.0, 0.0, 0.0, 0.0, 95.0]);
        assert_eq!(r.trends[0], TrendDirection::Up);
        assert_eq!(r.trends[4], TrendDirection::Down);
        assert_eq!(r.company_label, "Vallourec SA");
        assert_eq!(radar_series("", &period()).company_label, "Company");
    }
}

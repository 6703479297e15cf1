use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaSignals {
    pub has_structured_data: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MobileSignals {
    pub has_viewport_meta: bool,
    pub is_responsive: bool,
    pub touch_friendly: bool,
    pub mobile_speed: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocalSeoSignals {
    pub has_google_my_business: bool,
    pub has_local_schema: bool,
    pub local_keywords: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySignals {
    pub has_security_headers: bool,
    pub mixed_content: bool,
    pub certificate_valid: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CoreWebVitals {
    pub lcp: f64,
    pub fid: f64,
    pub cls: f64,
    pub fcp: f64,
    pub ttfb: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageWeight {
    pub page_size_kb: u32,
    pub requests: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorMetrics {
    pub on_page: u8,
    pub technical: u8,
    pub content: u8,
    pub performance: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorProfile {
    pub url: String,
    pub title: String,
    pub score: u8,
    pub metrics: CompetitorMetrics,
    pub key_strengths: Vec<String>,
    pub opportunities: Vec<String>,
}

/// Source of every signal the engine cannot derive from page content alone.
/// The default implementation simulates them; inject a fixed source wherever
/// reproducible output matters.
pub trait SignalSource: Send + Sync {
    fn schema_signals(&self) -> SchemaSignals;
    fn mobile_signals(&self) -> MobileSignals;
    fn local_seo_signals(&self) -> LocalSeoSignals;
    fn security_signals(&self, has_https: bool) -> SecuritySignals;
    fn core_web_vitals(&self) -> CoreWebVitals;
    fn accessibility_score(&self) -> u8;
    fn best_practices_score(&self) -> u8;
    fn page_weight(&self) -> PageWeight;
    fn competitors(&self, host: &str) -> Vec<CompetitorProfile>;
}

const COMPETITOR_STRENGTHS: [&str; 3] = [
    "Strong meta descriptions",
    "Good internal linking",
    "Fast loading speed",
];

const COMPETITOR_OPPORTUNITIES: [&str; 3] = [
    "Missing schema markup",
    "Poor mobile optimization",
    "Weak content structure",
];

/// Plausible stand-in measurements, drawn fresh per call. Callers must not
/// assume determinism or correctness.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedSignals;

impl SignalSource for SimulatedSignals {
    fn schema_signals(&self) -> SchemaSignals {
        SchemaSignals {
            has_structured_data: rand::thread_rng().gen_bool(0.4),
        }
    }

    fn mobile_signals(&self) -> MobileSignals {
        let mut rng = rand::thread_rng();
        MobileSignals {
            has_viewport_meta: rng.gen_bool(0.8),
            is_responsive: rng.gen_bool(0.7),
            touch_friendly: rng.gen_bool(0.6),
            mobile_speed: rng.gen_range(60..=95),
        }
    }

    fn local_seo_signals(&self) -> LocalSeoSignals {
        let mut rng = rand::thread_rng();
        LocalSeoSignals {
            has_google_my_business: rng.gen_bool(0.5),
            has_local_schema: rng.gen_bool(0.3),
            local_keywords: rng.gen_range(0..10),
        }
    }

    fn security_signals(&self, has_https: bool) -> SecuritySignals {
        let mut rng = rand::thread_rng();
        SecuritySignals {
            has_security_headers: rng.gen_bool(0.6),
            mixed_content: rng.gen_bool(0.2),
            certificate_valid: has_https && rng.gen_bool(0.9),
        }
    }

    fn core_web_vitals(&self) -> CoreWebVitals {
        let mut rng = rand::thread_rng();
        CoreWebVitals {
            lcp: rng.gen_range(1.2..3.2),
            fid: rng.gen_range(50.0..150.0),
            cls: rng.gen_range(0.05..0.25),
            fcp: rng.gen_range(0.8..2.3),
            ttfb: rng.gen_range(200.0..700.0),
        }
    }

    fn accessibility_score(&self) -> u8 {
        rand::thread_rng().gen_range(85..=100)
    }

    fn best_practices_score(&self) -> u8 {
        rand::thread_rng().gen_range(80..=100)
    }

    fn page_weight(&self) -> PageWeight {
        let mut rng = rand::thread_rng();
        PageWeight {
            page_size_kb: rng.gen_range(500..=2500),
            requests: rng.gen_range(20..=100),
        }
    }

    fn competitors(&self, host: &str) -> Vec<CompetitorProfile> {
        let mut rng = rand::thread_rng();
        let label = host
            .trim_start_matches("www.")
            .split('.')
            .next()
            .unwrap_or(host);
        (1..=3)
            .map(|n| CompetitorProfile {
                url: format!("https://competitor{n}-{label}.com"),
                title: format!("Competitor {n}"),
                score: rng.gen_range(70..=95),
                metrics: CompetitorMetrics {
                    on_page: rng.gen_range(65..=95),
                    technical: rng.gen_range(70..=95),
                    content: rng.gen_range(75..=95),
                    performance: rng.gen_range(60..=95),
                },
                key_strengths: COMPETITOR_STRENGTHS[..rng.gen_range(1..=3)]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                opportunities: COMPETITOR_OPPORTUNITIES[..rng.gen_range(1..=3)]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            })
            .collect()
    }
}

/// Deterministic signal source. The default is every signal healthy; tests
/// flip individual fields to drive specific deductions.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedSignals {
    pub schema: SchemaSignals,
    pub mobile: MobileSignals,
    pub local_seo: LocalSeoSignals,
    pub security: SecuritySignals,
    pub vitals: CoreWebVitals,
    pub accessibility: u8,
    pub best_practices: u8,
    pub weight: PageWeight,
    pub competitors: Vec<CompetitorProfile>,
}

impl Default for FixedSignals {
    fn default() -> Self {
        Self {
            schema: SchemaSignals {
                has_structured_data: true,
            },
            mobile: MobileSignals {
                has_viewport_meta: true,
                is_responsive: true,
                touch_friendly: true,
                mobile_speed: 90,
            },
            local_seo: LocalSeoSignals {
                has_google_my_business: true,
                has_local_schema: true,
                local_keywords: 5,
            },
            security: SecuritySignals {
                has_security_headers: true,
                mixed_content: false,
                certificate_valid: true,
            },
            vitals: CoreWebVitals {
                lcp: 1.8,
                fid: 70.0,
                cls: 0.08,
                fcp: 1.2,
                ttfb: 350.0,
            },
            accessibility: 95,
            best_practices: 90,
            weight: PageWeight {
                page_size_kb: 1200,
                requests: 45,
            },
            competitors: Vec::new(),
        }
    }
}

impl SignalSource for FixedSignals {
    fn schema_signals(&self) -> SchemaSignals {
        self.schema
    }

    fn mobile_signals(&self) -> MobileSignals {
        self.mobile
    }

    fn local_seo_signals(&self) -> LocalSeoSignals {
        self.local_seo
    }

    fn security_signals(&self, has_https: bool) -> SecuritySignals {
        SecuritySignals {
            // an invalid scheme can never carry a valid certificate
            certificate_valid: self.security.certificate_valid && has_https,
            ..self.security
        }
    }

    fn core_web_vitals(&self) -> CoreWebVitals {
        self.vitals
    }

    fn accessibility_score(&self) -> u8 {
        self.accessibility
    }

    fn best_practices_score(&self) -> u8 {
        self.best_practices
    }

    fn page_weight(&self) -> PageWeight {
        self.weight
    }

    fn competitors(&self, _host: &str) -> Vec<CompetitorProfile> {
        self.competitors.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_signals_stay_in_range() {
        let signals = SimulatedSignals;
        for _ in 0..50 {
            let vitals = signals.core_web_vitals();
            assert!((1.2..=3.2).contains(&vitals.lcp));
            assert!((50.0..=150.0).contains(&vitals.fid));
            assert!((0.05..=0.25).contains(&vitals.cls));
            assert!((0.8..=2.3).contains(&vitals.fcp));
            assert!((200.0..=700.0).contains(&vitals.ttfb));
            assert!((85..=100).contains(&signals.accessibility_score()));
            assert!((80..=100).contains(&signals.best_practices_score()));
            let mobile = signals.mobile_signals();
            assert!((60..=95).contains(&mobile.mobile_speed));
        }
    }

    #[test]
    fn test_simulated_certificate_never_valid_without_https() {
        let signals = SimulatedSignals;
        for _ in 0..50 {
            assert!(!signals.security_signals(false).certificate_valid);
        }
    }

    #[test]
    fn test_simulated_competitors_derive_from_host() {
        let competitors = SimulatedSignals.competitors("www.example.com");
        assert_eq!(competitors.len(), 3);
        assert_eq!(competitors[0].url, "https://competitor1-example.com");
        assert_eq!(competitors[2].title, "Competitor 3");
        for competitor in &competitors {
            assert!((1..=3).contains(&competitor.key_strengths.len()));
            assert!((1..=3).contains(&competitor.opportunities.len()));
        }
    }

    #[test]
    fn test_fixed_signals_gate_certificate_on_scheme() {
        let signals = FixedSignals::default();
        assert!(signals.security_signals(true).certificate_valid);
        assert!(!signals.security_signals(false).certificate_valid);
    }
}

use serde::{Deserialize, Serialize};

/// Region selector of the dashboard. `Brasil` means "all regions".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    #[default]
    Brasil,
    CentroOeste,
    Nordeste,
    Norte,
    Sudeste,
    Sul,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Brasil,
        Region::CentroOeste,
        Region::Nordeste,
        Region::Norte,
        Region::Sudeste,
        Region::Sul,
    ];

    /// Code used in our own query strings (same as serde form)
    pub fn code(&self) -> &'static str {
        match self {
            Region::Brasil => "brasil",
            Region::CentroOeste => "centro-oeste",
            Region::Nordeste => "nordeste",
            Region::Norte => "norte",
            Region::Sudeste => "sudeste",
            Region::Sul => "sul",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::Brasil => "Brasil",
            Region::CentroOeste => "Centro-Oeste",
            Region::Nordeste => "Nordeste",
            Region::Norte => "Norte",
            Region::Sudeste => "Sudeste",
            Region::Sul => "Sul",
        }
    }

    /// Value of the upstream `regiao` parameter: empty for the whole country,
    /// the lowercase label otherwise
    pub fn api_value(&self) -> String {
        match self {
            Region::Brasil => String::new(),
            other => other.label().to_lowercase(),
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }
}

/// Entry of GET /api/d402/regions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionOption {
    pub code: String,
    pub label: String,
}

impl From<Region> for RegionOption {
    fn from(region: Region) -> Self {
        Self {
            code: region.code().to_string(),
            label: region.label().to_string(),
        }
    }
}

//! Postal-code address lookup.
//!
//! Queries a ViaCEP-compatible service by an 8-digit Brazilian postal
//! code. Lookups are a convenience for form prefill, so every failure
//! mode (bad input, network error, unknown code) collapses to `None`
//! and the caller's fields are simply left unfilled.

use serde::Deserialize;

/// Public endpoint of the ViaCEP service.
pub const VIACEP_BASE_URL: &str = "https://viacep.com.br";

/// Address fields resolved from a postal code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalAddress {
    /// Street name.
    pub street: String,
    /// Neighborhood.
    pub neighborhood: String,
    /// City.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// The postal code as returned by the service.
    pub postal_code: String,
}

#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    erro: bool,
    #[serde(default)]
    cep: String,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

/// Client for a ViaCEP-compatible lookup service.
#[derive(Debug, Clone)]
pub struct PostalLookup {
    client: reqwest::Client,
    base_url: String,
}

impl Default for PostalLookup {
    fn default() -> Self {
        Self::new(VIACEP_BASE_URL)
    }
}

impl PostalLookup {
    /// Creates a lookup client against the given service base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Resolves a postal code to address fields.
    ///
    /// Non-digit characters in the input are ignored; anything other
    /// than exactly 8 digits short-circuits to `None` without a
    /// request. Service errors and unknown codes also yield `None`.
    pub async fn lookup(&self, postal_code: &str) -> Option<PostalAddress> {
        let digits: String = postal_code.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != 8 {
            return None;
        }

        let url = format!("{}/ws/{digits}/json/", self.base_url);
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!("postal lookup request failed: {err}");
                return None;
            }
        };

        let body: ViaCepResponse = match response.json().await {
            Ok(body) => body,
            Err(err) => {
                tracing::debug!("postal lookup returned malformed body: {err}");
                return None;
            }
        };

        if body.erro {
            return None;
        }

        Some(PostalAddress {
            street: body.logradouro,
            neighborhood: body.bairro,
            city: body.localidade,
            state: body.uf,
            postal_code: if body.cep.is_empty() { digits } else { body.cep },
        })
    }
}

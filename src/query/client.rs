use log::{info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
	ArticlePeople, Guest, GuestData, GraphQlRequest, GraphQlResponse, LocaleVariables,
	Parliamentarian, ParliamentarianData, PersonVariables,
};
use crate::error::QueryError;
use crate::i18n::Locale;

const ARTICLE_PEOPLE_QUERY: &str = r#"query articlePeople($locale: Locale!) {
  parliamentarians(locale: $locale) {
    name
    lastName
    id
  }
  guests(locale: $locale) {
    name
    lastName
    id
  }
}"#;

const PARLIAMENTARIAN_QUERY: &str = r#"query getParliamentarian($locale: Locale!, $id: ID!) {
  getParliamentarian(locale: $locale, id: $id) {
    id
    name
    firstName
    lastName
    portrait
    council
    gender
    partyMembership {
      party {
        abbr
      }
    }
    canton
    connections {
      group
      function
      via {
        __typename
        ... on Guest {
          name
        }
      }
      to {
        __typename
        ... on Organisation {
          name
        }
      }
    }
  }
}"#;

const GUEST_QUERY: &str = r#"query getGuest($locale: Locale!, $id: ID!) {
  getGuest(locale: $locale, id: $id) {
    id
    name
    firstName
    lastName
    parliamentarian
    function
    connections {
      group
      function
      to {
        __typename
        ... on Organisation {
          name
        }
      }
    }
  }
}"#;

/// Client for the Lobbywatch GraphQL service.
#[derive(Clone, Debug)]
pub struct QueryClient {
	http: reqwest::Client,
	endpoint: String,
}

impl QueryClient {
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			http: reqwest::Client::new(),
			endpoint: endpoint.into(),
		}
	}

	async fn execute<V, T>(&self, query: &str, variables: V) -> Result<T, QueryError>
	where
		V: Serialize,
		T: DeserializeOwned,
	{
		let response = self
			.http
			.post(&self.endpoint)
			.json(&GraphQlRequest { query, variables })
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			warn!("query service at {} returned {status}", self.endpoint);
			return Err(QueryError::Status(status.as_u16()));
		}

		let body: GraphQlResponse<T> = response.json().await?;
		body.into_result()
	}

	/// Everyone the article could mention.
	pub async fn article_people(&self, locale: Locale) -> Result<ArticlePeople, QueryError> {
		info!("fetching people list ({locale})");
		self.execute(ARTICLE_PEOPLE_QUERY, LocaleVariables { locale })
			.await
	}

	pub async fn parliamentarian(
		&self,
		locale: Locale,
		id: &str,
	) -> Result<Parliamentarian, QueryError> {
		info!("fetching parliamentarian {id} ({locale})");
		let data: ParliamentarianData = self
			.execute(PARLIAMENTARIAN_QUERY, PersonVariables { locale, id })
			.await?;
		data.get_parliamentarian
			.ok_or_else(|| QueryError::NotFound(id.to_string()))
	}

	pub async fn guest(&self, locale: Locale, id: &str) -> Result<Guest, QueryError> {
		info!("fetching guest {id} ({locale})");
		let data: GuestData = self
			.execute(GUEST_QUERY, PersonVariables { locale, id })
			.await?;
		data.get_guest
			.ok_or_else(|| QueryError::NotFound(id.to_string()))
	}
}

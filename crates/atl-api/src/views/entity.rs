use atl_core::entities::{Created, Lookup};
use atl_core::{Collection, Record};

use super::{Confirm, Mutation, Submission};
use crate::{ApiClient, ApiError};

/// List / create / update / delete flow for one collection.
///
/// `load` fetches the records plus every collection in [`Record::LOOKUPS`];
/// mutations reload only the records.
pub struct EntityView<'a, R: Record> {
    client: &'a ApiClient,
    records: Vec<R>,
    lookups: Vec<(Collection, Vec<Lookup>)>,
    message: Option<String>,
}

impl<'a, R: Record> EntityView<'a, R> {
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            records: Vec::new(),
            lookups: Vec::new(),
            message: None,
        }
    }

    /// Records from the most recent load.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Rows of a related collection fetched by [`Self::load`]. Empty if the
    /// collection is not one of the record's lookups.
    #[must_use]
    pub fn lookup(&self, collection: Collection) -> &[Lookup] {
        self.lookups
            .iter()
            .find(|(c, _)| *c == collection)
            .map(|(_, rows)| rows.as_slice())
            .unwrap_or_default()
    }

    /// Record with `id` from the most recent load, if present.
    #[must_use]
    pub fn find(&self, id: i64) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Message left by the last create.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Fetch the collection and its lookups, one request at a time.
    ///
    /// # Errors
    ///
    /// Returns the first failing request's [`ApiError`].
    pub async fn load(&mut self) -> Result<&[R], ApiError> {
        self.reload().await?;
        let mut lookups = Vec::with_capacity(R::LOOKUPS.len());
        for collection in R::LOOKUPS {
            let rows: Vec<Lookup> = self.client.get_json(collection.as_str()).await?;
            lookups.push((*collection, rows));
        }
        self.lookups = lookups;
        Ok(&self.records)
    }

    /// Re-fetch only the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or returns a non-success status.
    pub async fn reload(&mut self) -> Result<&[R], ApiError> {
        self.records = self.client.get_json(R::KIND.as_str()).await?;
        Ok(&self.records)
    }

    /// Fetch one record by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] with status 404 when the record does not exist.
    pub async fn get(&self, id: i64) -> Result<R, ApiError> {
        self.client
            .get_json(&format!("{}/{id}", R::KIND.as_str()))
            .await
    }

    /// POST a new record, then reload on success.
    ///
    /// A non-success response is not an error: it yields
    /// `"Error adding <entity>"` and leaves the records as they were.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a failing reload.
    pub async fn create(&mut self, new: &R::New) -> Result<Submission, ApiError> {
        let kind = R::KIND;
        let resp = self.client.post_json(kind.as_str(), new).await?;

        let submission = if resp.status().is_success() {
            let id = resp.json::<Created>().await.ok().map(|c| c.id);
            let message = R::new_label(new).map_or_else(
                || format!("Added {}", kind.singular()),
                |label| format!("Added {}: {label}", kind.singular()),
            );
            Submission {
                ok: true,
                id,
                message,
            }
        } else {
            tracing::warn!(entity = %kind, status = resp.status().as_u16(), "create rejected");
            Submission {
                ok: false,
                id: None,
                message: format!("Error adding {}", kind.singular()),
            }
        };

        self.message = Some(submission.message.clone());
        if submission.ok {
            self.reload().await?;
        }
        Ok(submission)
    }

    /// PUT a partial update, then reload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a failing reload.
    pub async fn update(&mut self, id: i64, update: &R::Update) -> Result<Mutation, ApiError> {
        let url = self.client.record_url(R::KIND, id);
        let resp = self.client.put_data(&url, update).await?;
        let mutation = Mutation::from_response(id, &resp);
        self.reload().await?;
        Ok(mutation)
    }

    /// Ask for confirmation, DELETE, then reload.
    ///
    /// Returns `None` without sending anything when the prompt is declined.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a failing reload.
    pub async fn delete(
        &mut self,
        id: i64,
        confirm: &mut dyn Confirm,
    ) -> Result<Option<Mutation>, ApiError> {
        let prompt = format!("Delete this {}?", R::KIND.singular());
        if !confirm.confirm(&prompt) {
            return Ok(None);
        }
        let url = self.client.record_url(R::KIND, id);
        let resp = self.client.delete_data(&url).await?;
        let mutation = Mutation::from_response(id, &resp);
        self.reload().await?;
        Ok(Some(mutation))
    }
}

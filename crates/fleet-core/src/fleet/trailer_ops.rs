//! Trailer operations for the Fleet.

use super::Fleet;
use crate::{
    display::Trailers,
    error::Result,
    models::Trailer,
    params::{CreateTrailer, Id, ListTrailers, UpdateTrailer},
};

impl Fleet {
    /// Registers a trailer. The registration must be unique.
    pub async fn create_trailer(&self, params: &CreateTrailer) -> Result<Trailer> {
        params.validate()?;
        let params = params.clone();

        self.with_db(move |db| {
            db.create_trailer(
                params.registration.trim(),
                params.kind.trim(),
                params.capacity_kg,
                params.status.unwrap_or_default(),
            )
        })
        .await
    }

    /// Retrieves a trailer by its ID.
    pub async fn get_trailer(&self, params: &Id) -> Result<Option<Trailer>> {
        let id = params.id;
        self.with_db(move |db| db.get_trailer(id)).await
    }

    /// Lists trailers, optionally restricted to one status.
    pub async fn list_trailers(&self, params: &ListTrailers) -> Result<Trailers> {
        let statuses: Vec<_> = params.status.into_iter().collect();
        let trailers = self.with_db(move |db| db.list_trailers(&statuses)).await?;
        Ok(Trailers(trailers))
    }

    /// Applies a partial update. Returns `None` if the trailer doesn't exist.
    pub async fn update_trailer(&self, params: &UpdateTrailer) -> Result<Option<Trailer>> {
        let request = params.validate()?;
        let id = params.id;
        self.with_db(move |db| db.update_trailer(id, request)).await
    }

    /// Deletes a trailer that never took part in a trip, returning it.
    pub async fn delete_trailer(&self, params: &Id) -> Result<Option<Trailer>> {
        let id = params.id;
        self.with_db(move |db| {
            let Some(trailer) = db.get_trailer(id)? else {
                return Ok(None);
            };
            db.delete_trailer(id)?;
            Ok(Some(trailer))
        })
        .await
    }
}

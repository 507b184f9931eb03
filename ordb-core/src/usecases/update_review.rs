use super::prelude::*;

/// Only fields that are set are applied.
#[derive(Debug, Clone, Default)]
pub struct ReviewUpdate {
    pub rating: Option<RatingValue>,
    pub comment: Option<String>,
    pub photos: Option<Vec<String>>,
}

pub fn update_review<R>(
    repo: &R,
    author_id: &Id,
    review_id: &str,
    update: ReviewUpdate,
) -> Result<Review>
where
    R: ReviewRepo,
{
    let mut review = repo.get_review(review_id)?;
    if review.user_id != *author_id {
        return Err(Error::Forbidden);
    }
    if let Some(rating) = update.rating {
        if !rating.is_valid() {
            return Err(Error::RatingValue);
        }
        review.rating = rating;
    }
    if let Some(comment) = update.comment {
        if comment.trim().is_empty() {
            return Err(Error::EmptyComment);
        }
        review.comment = comment;
    }
    if let Some(photos) = update.photos {
        review.photos = photos;
    }
    repo.update_review(&review)?;
    Ok(review)
}

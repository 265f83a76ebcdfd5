//! Course catalog and playlist endpoints.

use crate::client::{parse_envelope, PortalClient};
use crate::error::Result;
use crate::types::{
    CourseUpdate, MaterialUpdate, NewCourse, NewMaterial, NewVideo, PlaylistUpsert, VideoUpdate,
};
use gurukul_core::reorder::{plan_move, MoveDirection};
use gurukul_core::types::{
    Course, CourseId, CoursePlaylist, MaterialId, PlaylistMaterial, PlaylistVideo, VideoId,
};
use tracing::{debug, info};

/// Client for the partner's course catalog.
#[derive(Debug)]
pub struct CoursesClient<'a> {
    portal: &'a PortalClient,
    base_url: String,
    access_token: String,
}

impl<'a> CoursesClient<'a> {
    pub(crate) fn new(portal: &'a PortalClient, base_url: String, access_token: String) -> Self {
        Self {
            portal,
            base_url,
            access_token,
        }
    }

    /// List the partner's courses.
    pub async fn list(&self) -> Result<Vec<Course>> {
        let url = format!("{}/api/v1/partner/courses", self.base_url);
        debug!(url = %url, "Listing courses");

        let response = self
            .portal
            .http()
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status().is_success() {
            parse_envelope(response, "course list").await
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Create a course.
    pub async fn create(&self, course: &NewCourse) -> Result<Course> {
        let url = format!("{}/api/v1/partner/courses", self.base_url);
        debug!(url = %url, title = %course.title, "Creating course");

        let response = self
            .portal
            .http()
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(course)
            .send()
            .await?;

        if response.status().is_success() {
            let created: Course = parse_envelope(response, "created course").await?;
            info!(course_id = %created.id, "Course created");
            Ok(created)
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Apply a partial update to a course.
    pub async fn update(&self, course_id: &CourseId, update: &CourseUpdate) -> Result<Course> {
        let url = format!("{}/api/v1/partner/courses/{}", self.base_url, course_id);
        debug!(url = %url, "Updating course");

        let response = self
            .portal
            .http()
            .put(&url)
            .bearer_auth(&self.access_token)
            .json(update)
            .send()
            .await?;

        if response.status().is_success() {
            parse_envelope(response, "updated course").await
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Fetch a course's playlist, or `None` if one has not been created yet.
    pub async fn playlist(&self, course_id: &CourseId) -> Result<Option<CoursePlaylist>> {
        let url = format!(
            "{}/api/v1/partner/courses/{}/playlist",
            self.base_url, course_id
        );
        debug!(url = %url, "Fetching playlist");

        let response = self
            .portal
            .http()
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let playlist: CoursePlaylist = parse_envelope(response, "playlist").await?;
            Ok(Some(playlist))
        } else if status.as_u16() == 404 {
            debug!(course_id = %course_id, "Course has no playlist yet");
            Ok(None)
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Create or replace a course's playlist metadata.
    pub async fn save_playlist(
        &self,
        course_id: &CourseId,
        playlist: &PlaylistUpsert,
    ) -> Result<CoursePlaylist> {
        let url = format!(
            "{}/api/v1/partner/courses/{}/playlist",
            self.base_url, course_id
        );
        debug!(url = %url, "Saving playlist");

        let response = self
            .portal
            .http()
            .put(&url)
            .bearer_auth(&self.access_token)
            .json(playlist)
            .send()
            .await?;

        if response.status().is_success() {
            parse_envelope(response, "saved playlist").await
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Add a video to a course's playlist.
    pub async fn add_video(&self, course_id: &CourseId, video: &NewVideo) -> Result<PlaylistVideo> {
        let url = format!(
            "{}/api/v1/partner/courses/{}/playlist/videos",
            self.base_url, course_id
        );
        debug!(url = %url, title = %video.title, "Adding playlist video");

        let response = self
            .portal
            .http()
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(video)
            .send()
            .await?;

        if response.status().is_success() {
            parse_envelope(response, "added video").await
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Apply a partial update to a playlist video.
    pub async fn update_video(
        &self,
        course_id: &CourseId,
        video_id: &VideoId,
        update: &VideoUpdate,
    ) -> Result<PlaylistVideo> {
        let url = format!(
            "{}/api/v1/partner/courses/{}/playlist/videos/{}",
            self.base_url, course_id, video_id
        );
        debug!(url = %url, "Updating playlist video");

        let response = self
            .portal
            .http()
            .put(&url)
            .bearer_auth(&self.access_token)
            .json(update)
            .send()
            .await?;

        if response.status().is_success() {
            parse_envelope(response, "updated video").await
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Remove a video from a course's playlist.
    pub async fn delete_video(&self, course_id: &CourseId, video_id: &VideoId) -> Result<()> {
        let url = format!(
            "{}/api/v1/partner/courses/{}/playlist/videos/{}",
            self.base_url, course_id, video_id
        );
        debug!(url = %url, "Deleting playlist video");

        let response = self
            .portal
            .http()
            .delete(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Add a study material to a course's playlist.
    pub async fn add_material(
        &self,
        course_id: &CourseId,
        material: &NewMaterial,
    ) -> Result<PlaylistMaterial> {
        let url = format!(
            "{}/api/v1/partner/courses/{}/playlist/materials",
            self.base_url, course_id
        );
        debug!(url = %url, title = %material.title, "Adding playlist material");

        let response = self
            .portal
            .http()
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(material)
            .send()
            .await?;

        if response.status().is_success() {
            parse_envelope(response, "added material").await
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Apply a partial update to a playlist material.
    pub async fn update_material(
        &self,
        course_id: &CourseId,
        material_id: &MaterialId,
        update: &MaterialUpdate,
    ) -> Result<PlaylistMaterial> {
        let url = format!(
            "{}/api/v1/partner/courses/{}/playlist/materials/{}",
            self.base_url, course_id, material_id
        );
        debug!(url = %url, "Updating playlist material");

        let response = self
            .portal
            .http()
            .put(&url)
            .bearer_auth(&self.access_token)
            .json(update)
            .send()
            .await?;

        if response.status().is_success() {
            parse_envelope(response, "updated material").await
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Remove a study material from a course's playlist.
    pub async fn delete_material(
        &self,
        course_id: &CourseId,
        material_id: &MaterialId,
    ) -> Result<()> {
        let url = format!(
            "{}/api/v1/partner/courses/{}/playlist/materials/{}",
            self.base_url, course_id, material_id
        );
        debug!(url = %url, "Deleting playlist material");

        let response = self
            .portal
            .http()
            .delete(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Move the video at `index` one position up or down.
    ///
    /// Persists the swap as two order updates, moved video first, then the
    /// displaced neighbor. The second update is only sent after the first
    /// succeeds. Returns `Ok(false)` without issuing any request when the
    /// move would fall off either end of the list.
    pub async fn move_video(
        &self,
        course_id: &CourseId,
        videos: &[PlaylistVideo],
        index: usize,
        direction: MoveDirection,
    ) -> Result<bool> {
        let Some(plan) = plan_move(videos.len(), index, direction) else {
            debug!(index, ?direction, "Video move is a no-op at list edge");
            return Ok(false);
        };

        let moving = &videos[plan.moving.index];
        let displaced = &videos[plan.displaced.index];
        debug!(
            course_id = %course_id,
            moving = %moving.id,
            displaced = %displaced.id,
            "Swapping video order"
        );

        self.update_video(course_id, &moving.id, &VideoUpdate::order(plan.moving.order))
            .await?;
        self.update_video(
            course_id,
            &displaced.id,
            &VideoUpdate::order(plan.displaced.order),
        )
        .await?;

        Ok(true)
    }

    /// Move the material at `index` one position up or down.
    ///
    /// Same protocol as [`move_video`](Self::move_video): two sequential
    /// order updates, or `Ok(false)` at a list edge.
    pub async fn move_material(
        &self,
        course_id: &CourseId,
        materials: &[PlaylistMaterial],
        index: usize,
        direction: MoveDirection,
    ) -> Result<bool> {
        let Some(plan) = plan_move(materials.len(), index, direction) else {
            debug!(index, ?direction, "Material move is a no-op at list edge");
            return Ok(false);
        };

        let moving = &materials[plan.moving.index];
        let displaced = &materials[plan.displaced.index];
        debug!(
            course_id = %course_id,
            moving = %moving.id,
            displaced = %displaced.id,
            "Swapping material order"
        );

        self.update_material(
            course_id,
            &moving.id,
            &MaterialUpdate::order(plan.moving.order),
        )
        .await?;
        self.update_material(
            course_id,
            &displaced.id,
            &MaterialUpdate::order(plan.displaced.order),
        )
        .await?;

        Ok(true)
    }
}

use async_graphql::{Context, ID, Object, Result};

use crate::graph::model_manager;
use crate::model::CrudRepository;
use crate::model::entity::{Course, Lesson, Progress, Subject, Submission, Unit, User};

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Always null until real authentication exists.
    async fn viewer(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        Ok(User::viewer(model_manager(ctx)?).await)
    }

    async fn subjects(&self, ctx: &Context<'_>) -> Result<Vec<Subject>> {
        Ok(Subject::list(model_manager(ctx)?).await)
    }

    async fn courses(
        &self,
        ctx: &Context<'_>,
        grade: Option<i32>,
        subject_id: Option<ID>,
    ) -> Result<Vec<Course>> {
        Ok(Course::list(model_manager(ctx)?, grade, subject_id.as_ref()).await)
    }

    async fn course(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Course>> {
        Ok(Course::find_by_id(model_manager(ctx)?, &id).await)
    }

    async fn units(&self, ctx: &Context<'_>, course_id: ID) -> Result<Vec<Unit>> {
        Ok(Unit::all_by_course(model_manager(ctx)?, &course_id).await)
    }

    async fn lessons(&self, ctx: &Context<'_>, unit_id: ID) -> Result<Vec<Lesson>> {
        Ok(Lesson::all_by_unit(model_manager(ctx)?, &unit_id).await)
    }

    async fn lesson(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Lesson>> {
        Ok(Lesson::find_by_id(model_manager(ctx)?, &id).await)
    }

    async fn recommended_lessons(&self, ctx: &Context<'_>, grade: i32) -> Result<Vec<Lesson>> {
        Ok(Lesson::recommended(model_manager(ctx)?, grade).await)
    }

    async fn search_lessons(
        &self,
        ctx: &Context<'_>,
        q: String,
        grade: Option<i32>,
    ) -> Result<Vec<Lesson>> {
        Ok(Lesson::search(model_manager(ctx)?, &q, grade).await)
    }

    async fn my_progress(&self, ctx: &Context<'_>, course_id: Option<ID>) -> Result<Vec<Progress>> {
        Ok(Progress::list_for_viewer(model_manager(ctx)?, course_id.as_ref()).await)
    }

    async fn progress_by_lesson(&self, ctx: &Context<'_>, lesson_id: ID) -> Result<Progress> {
        Ok(Progress::find_by_lesson(model_manager(ctx)?, &lesson_id).await)
    }

    async fn my_draft_lessons(&self, ctx: &Context<'_>) -> Result<Vec<Lesson>> {
        Ok(Lesson::drafts_for_viewer(model_manager(ctx)?).await)
    }

    /// `state` is accepted but not applied, every submission is returned.
    async fn submissions(&self, ctx: &Context<'_>, state: Option<String>) -> Result<Vec<Submission>> {
        Ok(Submission::list(model_manager(ctx)?, state.as_deref()).await)
    }
}

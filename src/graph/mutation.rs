use async_graphql::{Context, ErrorExtensions, ID, InputObject, Object, Result};
use serde::Deserialize;

use crate::graph::model_manager;
use crate::model::CrudRepository;
use crate::model::entity::{
    Attempt, AudioBlock, AudioBlockInput, Course, CourseCreate, Credentials, ImageBlock,
    ImageBlockInput, Lesson, LessonCreate, Progress, QuestionInput, Quiz, StudentProfile,
    StudentProfileCreate, SubmitQuizInput, Submission, TextBlock, TextBlockInput, Unit,
    UnitCreate, User, UserCreate, VideoBlock, VideoBlockInput,
};
use crate::utils::uploads::placeholder_upload_url;

#[derive(Debug, Clone, Deserialize, InputObject)]
#[serde(rename_all = "camelCase")]
#[graphql(name = "CreateUploadURLInput")]
pub struct CreateUploadUrlInput {
    pub filename: String,
    pub content_type: Option<String>,
}

#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn sign_up(&self, ctx: &Context<'_>, input: UserCreate) -> Result<User> {
        Ok(User::sign_up(model_manager(ctx)?, input).await)
    }

    /// Returns a static development token for any credentials.
    async fn sign_in(
        &self,
        ctx: &Context<'_>,
        email: Option<String>,
        phone: Option<String>,
        otp: Option<String>,
        password: Option<String>,
    ) -> Result<Option<String>> {
        let credentials = Credentials {
            email,
            phone,
            otp,
            password,
        };
        Ok(User::sign_in(model_manager(ctx)?, credentials).await)
    }

    async fn create_student_profile(
        &self,
        ctx: &Context<'_>,
        input: StudentProfileCreate,
    ) -> Result<StudentProfile> {
        Ok(StudentProfile::create(model_manager(ctx)?, input).await)
    }

    async fn create_course(&self, ctx: &Context<'_>, input: CourseCreate) -> Result<Course> {
        Course::create(model_manager(ctx)?, input)
            .await
            .map_err(|e| e.extend())
    }

    async fn create_unit(&self, ctx: &Context<'_>, input: UnitCreate) -> Result<Unit> {
        Unit::create(model_manager(ctx)?, input)
            .await
            .map_err(|e| e.extend())
    }

    async fn create_lesson(&self, ctx: &Context<'_>, input: LessonCreate) -> Result<Lesson> {
        Lesson::create(model_manager(ctx)?, input)
            .await
            .map_err(|e| e.extend())
    }

    async fn add_text_block(
        &self,
        ctx: &Context<'_>,
        lesson_id: ID,
        input: TextBlockInput,
    ) -> Result<TextBlock> {
        Ok(TextBlock::create(model_manager(ctx)?, &lesson_id, input).await)
    }

    async fn add_image_block(
        &self,
        ctx: &Context<'_>,
        lesson_id: ID,
        input: ImageBlockInput,
    ) -> Result<ImageBlock> {
        Ok(ImageBlock::create(model_manager(ctx)?, &lesson_id, input).await)
    }

    async fn add_audio_block(
        &self,
        ctx: &Context<'_>,
        lesson_id: ID,
        input: AudioBlockInput,
    ) -> Result<AudioBlock> {
        Ok(AudioBlock::create(model_manager(ctx)?, &lesson_id, input).await)
    }

    async fn add_video_block(
        &self,
        ctx: &Context<'_>,
        lesson_id: ID,
        input: VideoBlockInput,
    ) -> Result<VideoBlock> {
        Ok(VideoBlock::create(model_manager(ctx)?, &lesson_id, input).await)
    }

    async fn create_quiz(
        &self,
        ctx: &Context<'_>,
        lesson_id: ID,
        questions: Vec<QuestionInput>,
    ) -> Result<Quiz> {
        Ok(Quiz::create(model_manager(ctx)?, &lesson_id, questions).await)
    }

    async fn submit_for_review(&self, ctx: &Context<'_>, lesson_id: ID) -> Result<Submission> {
        Submission::create(model_manager(ctx)?, lesson_id)
            .await
            .map_err(|e| e.extend())
    }

    async fn approve_submission(&self, ctx: &Context<'_>, lesson_id: ID) -> Result<Submission> {
        Submission::approve(model_manager(ctx)?, &lesson_id)
            .await
            .map_err(|e| e.extend())
    }

    async fn publish_lesson(&self, ctx: &Context<'_>, lesson_id: ID) -> Result<Lesson> {
        Lesson::publish(model_manager(ctx)?, &lesson_id)
            .await
            .map_err(|e| e.extend())
    }

    async fn start_lesson(&self, ctx: &Context<'_>, lesson_id: ID) -> Result<Progress> {
        Ok(Progress::start(model_manager(ctx)?, &lesson_id).await)
    }

    async fn complete_lesson(
        &self,
        ctx: &Context<'_>,
        lesson_id: ID,
        score: Option<i32>,
    ) -> Result<Progress> {
        Ok(Progress::complete(model_manager(ctx)?, &lesson_id, score).await)
    }

    async fn submit_quiz(&self, ctx: &Context<'_>, input: SubmitQuizInput) -> Result<Attempt> {
        Ok(Attempt::submit(model_manager(ctx)?, input).await)
    }

    #[graphql(name = "createUploadURL")]
    async fn create_upload_url(&self, input: CreateUploadUrlInput) -> Result<String> {
        Ok(placeholder_upload_url(&input.filename))
    }
}

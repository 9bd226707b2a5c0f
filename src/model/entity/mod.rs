mod subject;
pub use subject::Subject;

mod course;
pub use course::{Course, CourseCreate};

mod unit;
pub use unit::{Unit, UnitCreate};

mod lesson;
pub use lesson::{LESSON_STATUS_PUBLISHED, Lesson, LessonCreate};

mod block;
pub use block::{
    AudioBlock, AudioBlockInput, ImageBlock, ImageBlockInput, TextBlock, TextBlockInput,
    VideoBlock, VideoBlockInput,
};

mod quiz;
pub use quiz::{Attempt, QuestionInput, Quiz, SubmitQuizInput};

mod submission;
pub use submission::{SUBMISSION_STATE_APPROVED, SUBMISSION_STATE_SUBMITTED, Submission};

mod progress;
pub use progress::{PLACEHOLDER_PROGRESS_ID, Progress};

mod user;
pub use user::{
    Credentials, DEV_TOKEN, Role, StudentProfile, StudentProfileCreate, User, UserCreate,
};

//! Option records, one per SDK operation family.

mod bucket;
mod challenge;
mod gov;
mod group;
mod hash;
mod listing;
mod object;
mod policy;
mod range;
mod storage_provider;

pub use bucket::{
    ApproveBucketOptions, BuyQuotaOption, CreateBucketBuilder, CreateBucketOptions,
    DeleteBucketOption, UpdateBucketOptions, UpdatePaymentOption, UpdateVisibilityOption,
};
pub use challenge::{ChallengeTarget, GetChallengeInfoOptions};
pub use gov::{MAX_METADATA_LEN, SubmitProposalOptions, VoteProposalOptions};
pub use group::{CreateGroupOptions, DeleteGroupOption, LeaveGroupOption, UpdateGroupMemberOption};
pub use hash::ComputeHashOptions;
pub use listing::{
    DEFAULT_DELIMITER, ListGroupsOptions, ListObjectsOptions, ListReadRecordOptions, QueryParams,
    ResumeFrom,
};
pub use object::{
    ApproveObjectOptions, CancelCreateOption, CreateObjectBuilder, CreateObjectOptions,
    DEFAULT_CONTENT_TYPE, DeleteObjectOption, PutObjectOptions, UpdateObjectOption,
};
pub use policy::{DeletePolicyOption, NewStatementOptions, PutPolicyOption};
pub use range::{GetObjectOption, RANGE_HEADER};
pub use storage_provider::{
    CreateStorageProviderBuilder, CreateStorageProviderOptions,
    GrantDepositForStorageProviderOptions,
};

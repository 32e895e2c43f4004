//! # Generic Messages
//!
//! The message types exchanged between `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the standard resource lifecycle:
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize a new resource under its natural key.
/// - **Get**: Fetches the current state of one resource by key.
/// - **List**: Fetches every resource, or only those matching an [`ActorEntity::Filter`].
/// - **Update**: Applies an [`ActorEntity::Update`] to an existing resource.
/// - **Delete**: Removes the resource.
///
/// The enum is generic over `T: ActorEntity`, so a payload meant for one resource
/// type can't be sent to another.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: Option<T::Filter>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}

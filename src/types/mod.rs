mod envelope;
pub use self::envelope::ApiResponse;

mod page;
pub use self::page::PagedResponse;

mod upload;
pub use self::upload::{StorageMethod, UploadTarget};

mod asset;
pub use self::asset::Asset;

mod file;
pub use self::file::{
    File, FileCreate, FileSet, FileSetCreate, FileSets, Files, Format, FormatCreate, Formats,
    MultipartUrlResponse, PartUrl, Storage, Storages,
};

mod proxy;
pub use self::proxy::{Proxies, Proxy};

mod keyframe;
pub use self::keyframe::{Keyframe, Keyframes, Resolution};

mod collection;
pub use self::collection::{
    AddContentResponse, Collection, CollectionContentInfo, CollectionContents, Content,
    CustomOrderStatus, ObjectType, Status,
};

mod segment;
pub use self::segment::{Segment, SegmentBody, Segments};

mod metadata;
pub use self::metadata::{FieldValue, FieldValues, MetadataValues, UpdateMetadata};

mod search;
pub use self::search::{Object, SearchBody, SearchResponse};

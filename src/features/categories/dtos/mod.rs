mod category_dto;

pub use category_dto::{
    BreadcrumbItemDto, CategoryDetailDto, CategoryResponseDto, CategoryTreeDto,
};

pub mod bubble_sort;
pub mod bucket_sort;
pub mod counting_sort;
pub mod insertion_sort;
pub mod quick_sort;
pub mod radix_sort;

use crate::domain::post::PostSeed;

/// Backing list of `GET /api/posts`, which the server-rendered page reads.
pub static API_POSTS: [PostSeed; 3] = [
    PostSeed {
        id: 1,
        title: "Server-Side Rendering",
        content: "Server-side rendering builds the page on the server and sends the finished HTML to the client.",
    },
    PostSeed {
        id: 2,
        title: "Benefits of SSR",
        content: "It helps with search engine optimisation and improves initial load performance.",
    },
    PostSeed {
        id: 3,
        title: "SSR vs CSR",
        content: "Understanding the difference between server-side and client-side rendering is important.",
    },
];

/// Embedded in the incrementally regenerated page. Timestamps are added on
/// every regeneration.
pub static ISR_POSTS: [PostSeed; 3] = [
    PostSeed {
        id: 1,
        title: "Incremental Static Regeneration",
        content: "Incremental static regeneration is a hybrid approach that rebuilds static pages at a fixed interval.",
    },
    PostSeed {
        id: 2,
        title: "Benefits of ISR",
        content: "It combines the performance of static generation with the data freshness of SSR.",
    },
    PostSeed {
        id: 3,
        title: "ISR vs SSG vs SSR",
        content: "ISR mixes the strengths of SSG and SSR, which is useful when data changes often.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_positive() {
        for list in [&API_POSTS, &ISR_POSTS] {
            let ids: HashSet<u32> = list.iter().map(|p| p.id).collect();
            assert_eq!(ids.len(), list.len());
            assert!(ids.iter().all(|id| *id > 0));
        }
    }
}

pub mod betweenness;
pub mod closeness_centrality;
pub mod degree_centrality;

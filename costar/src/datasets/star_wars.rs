use crate::graph::Graph;

/// `star_wars_graph` constructs the Star Wars Episode IV interaction graph.
///
/// Characters are nodes, and an edge connects two characters that speak
/// within the same scene. The edge weight is the number of scenes the two
/// characters share. Node properties carry the affiliation of each
/// character.
///
/// BACKGROUND These data follow the Star Wars social networks assembled by
/// Evelina Gabasova, in which the characters of each film are linked
/// whenever they both speak inside one scene and links are weighted by the
/// number of such scenes. The table below covers the central cast of
/// Episode IV: A New Hope.
///
/// REFERENCE
///   Gabasova, E. (2016). Star Wars social network.
///   https://doi.org/10.5281/zenodo.1411479
///
/// Returns:
///     A `Graph` object representing the Episode IV interaction network.
pub fn star_wars_graph() -> Graph {
    // Character roster with affiliations.
    let characters: [(&str, &str); 20] = [
        ("LUKE", "Rebellion"),
        ("LEIA", "Rebellion"),
        ("HAN", "Rebellion"),
        ("CHEWBACCA", "Rebellion"),
        ("C-3PO", "Rebellion"),
        ("R2-D2", "Rebellion"),
        ("OBI-WAN", "Jedi Order"),
        ("OWEN", "Civilian"),
        ("BERU", "Civilian"),
        ("GREEDO", "Hutt Cartel"),
        ("JABBA", "Hutt Cartel"),
        ("DARTH VADER", "Empire"),
        ("TARKIN", "Empire"),
        ("MOTTI", "Empire"),
        ("TAGGE", "Empire"),
        ("BIGGS", "Rebellion"),
        ("WEDGE", "Rebellion"),
        ("RED LEADER", "Rebellion"),
        ("GOLD LEADER", "Rebellion"),
        ("DODONNA", "Rebellion"),
    ];

    // Scene co-appearance counts.
    let scene_counts: [(&str, &str, u64); 48] = [
        ("LUKE", "C-3PO", 18),
        ("LUKE", "R2-D2", 16),
        ("LUKE", "OBI-WAN", 14),
        ("LUKE", "HAN", 13),
        ("LUKE", "LEIA", 12),
        ("LUKE", "CHEWBACCA", 10),
        ("C-3PO", "R2-D2", 17),
        ("HAN", "CHEWBACCA", 14),
        ("HAN", "LEIA", 9),
        ("CHEWBACCA", "LEIA", 7),
        ("OBI-WAN", "R2-D2", 7),
        ("OBI-WAN", "C-3PO", 6),
        ("OBI-WAN", "HAN", 6),
        ("OBI-WAN", "CHEWBACCA", 5),
        ("LEIA", "C-3PO", 6),
        ("LEIA", "R2-D2", 5),
        ("HAN", "C-3PO", 5),
        ("HAN", "R2-D2", 3),
        ("CHEWBACCA", "C-3PO", 5),
        ("CHEWBACCA", "R2-D2", 4),
        ("LUKE", "OWEN", 3),
        ("LUKE", "BERU", 3),
        ("OWEN", "BERU", 3),
        ("OWEN", "C-3PO", 2),
        ("BERU", "C-3PO", 1),
        ("HAN", "GREEDO", 1),
        ("HAN", "JABBA", 1),
        ("DARTH VADER", "TARKIN", 6),
        ("DARTH VADER", "LEIA", 3),
        ("DARTH VADER", "OBI-WAN", 2),
        ("DARTH VADER", "MOTTI", 2),
        ("DARTH VADER", "TAGGE", 2),
        ("TARKIN", "LEIA", 2),
        ("TARKIN", "MOTTI", 3),
        ("TARKIN", "TAGGE", 3),
        ("MOTTI", "TAGGE", 2),
        ("LUKE", "BIGGS", 5),
        ("LUKE", "WEDGE", 4),
        ("LUKE", "RED LEADER", 5),
        ("LUKE", "GOLD LEADER", 2),
        ("LUKE", "DODONNA", 2),
        ("LEIA", "DODONNA", 2),
        ("BIGGS", "WEDGE", 2),
        ("BIGGS", "RED LEADER", 3),
        ("WEDGE", "RED LEADER", 3),
        ("RED LEADER", "GOLD LEADER", 2),
        ("RED LEADER", "DODONNA", 2),
        ("GOLD LEADER", "DODONNA", 2),
    ];

    let mut graph = Graph::new();
    for (name, affiliation) in characters {
        graph
            .add_node(name, [("affiliation", affiliation)])
            .expect("Failed to add character");
    }
    for (src, dst, scenes) in scene_counts {
        graph
            .add_edge(src, dst, scenes as f64)
            .expect("Failed to add co-appearance");
    }

    graph
}

//! Built-in catalog: face shape -> frame style -> query phrases.

pub(crate) type StyleTable = (&'static str, &'static [&'static str]);
pub(crate) type CategoryTable = (&'static str, &'static [StyleTable]);

pub(crate) const BUILTIN_CATALOG: &[CategoryTable] = &[
    (
        "oval",
        &[
            (
                "aviator-gold3",
                &[
                    "gold aviator eyeglasses product photography",
                    "aviator glasses gold frame white background",
                    "gold metal aviator sunglasses isolated",
                ],
            ),
            (
                "round-tortoise3",
                &[
                    "round tortoiseshell eyeglasses product shot",
                    "circular tortoise shell glasses white background",
                    "round brown glasses frames isolated",
                ],
            ),
            (
                "square-black3",
                &[
                    "square black eyeglasses frame product",
                    "rectangular black glasses white background",
                    "black square frame eyewear isolated",
                ],
            ),
            (
                "cat-eye-elegant3",
                &[
                    "vintage cat eye glasses frame product",
                    "elegant cat eye eyeglasses white background",
                    "retro cat eye glasses isolated",
                ],
            ),
            (
                "oversized-fashion3",
                &[
                    "oversized fashion eyeglasses frame product",
                    "large frame glasses white background",
                    "big fashion glasses isolated",
                ],
            ),
            (
                "rimless-minimal3",
                &[
                    "rimless eyeglasses frame product",
                    "frameless glasses white background",
                    "minimalist rimless glasses isolated",
                ],
            ),
        ],
    ),
    (
        "round",
        &[
            (
                "square-brown3",
                &[
                    "square brown eyeglasses frame product",
                    "rectangular brown glasses white background",
                    "brown square frame glasses isolated",
                ],
            ),
            (
                "rectangular-pro3",
                &[
                    "rectangular professional eyeglasses product",
                    "business glasses frame white background",
                    "professional rectangular glasses isolated",
                ],
            ),
            (
                "cat-eye-sharp3",
                &[
                    "angular cat eye glasses frame product",
                    "sharp cat eye eyeglasses white background",
                    "pointed cat eye glasses isolated",
                ],
            ),
            (
                "geometric-designer3",
                &[
                    "geometric eyeglasses frame product",
                    "hexagon glasses frame white background",
                    "designer geometric glasses isolated",
                ],
            ),
            (
                "browline-classic3",
                &[
                    "browline eyeglasses frame product",
                    "clubmaster glasses white background",
                    "classic browline glasses isolated",
                ],
            ),
            (
                "wide-bold3",
                &[
                    "thick frame eyeglasses product",
                    "bold wide glasses frame white background",
                    "chunky glasses frame isolated",
                ],
            ),
        ],
    ),
    (
        "square",
        &[
            (
                "round-wire3",
                &[
                    "round wire rim eyeglasses product",
                    "circular metal frame glasses white background",
                    "thin wire glasses frame isolated",
                ],
            ),
            (
                "oval-rose3",
                &[
                    "oval rose gold eyeglasses product",
                    "pink gold glasses frame white background",
                    "rose gold oval glasses isolated",
                ],
            ),
            (
                "cat-eye-feminine3",
                &[
                    "feminine cat eye glasses frame product",
                    "delicate cat eye eyeglasses white background",
                    "soft cat eye glasses isolated",
                ],
            ),
            (
                "curved-comfort3",
                &[
                    "curved eyeglasses frame product",
                    "rounded rectangular glasses white background",
                    "comfort fit glasses isolated",
                ],
            ),
            (
                "soft-rect-blue3",
                &[
                    "blue rectangular eyeglasses product",
                    "navy glasses frame white background",
                    "blue prescription glasses isolated",
                ],
            ),
            (
                "rimless-round3",
                &[
                    "round rimless eyeglasses product",
                    "circular frameless glasses white background",
                    "round minimalist glasses isolated",
                ],
            ),
        ],
    ),
    (
        "heart",
        &[
            (
                "bottom-heavy3",
                &[
                    "bottom heavy eyeglasses frame product",
                    "wide lower rim glasses white background",
                    "bottom emphasis glasses isolated",
                ],
            ),
            (
                "round-balance3",
                &[
                    "balanced round eyeglasses product",
                    "proportional round glasses white background",
                    "medium round glasses isolated",
                ],
            ),
            (
                "oval-balance3",
                &[
                    "balanced oval eyeglasses product",
                    "proportional oval glasses white background",
                    "medium oval glasses isolated",
                ],
            ),
            (
                "cat-eye-subtle3",
                &[
                    "subtle cat eye glasses frame product",
                    "gentle cat eye eyeglasses white background",
                    "minimal cat eye glasses isolated",
                ],
            ),
            (
                "rimless-delicate3",
                &[
                    "delicate rimless eyeglasses product",
                    "lightweight frameless glasses white background",
                    "thin rimless glasses isolated",
                ],
            ),
            (
                "wide-bottom3",
                &[
                    "wide bottom frame glasses product",
                    "trapezoid glasses frame white background",
                    "bottom wide glasses isolated",
                ],
            ),
        ],
    ),
    (
        "diamond",
        &[
            (
                "cat-eye-dramatic3",
                &[
                    "dramatic cat eye glasses frame product",
                    "bold cat eye eyeglasses white background",
                    "statement cat eye glasses isolated",
                ],
            ),
            (
                "oval-flattering3",
                &[
                    "flattering oval eyeglasses product",
                    "elegant oval glasses white background",
                    "sophisticated oval glasses isolated",
                ],
            ),
            (
                "round-softening3",
                &[
                    "softening round eyeglasses product",
                    "large round glasses white background",
                    "circular soft glasses isolated",
                ],
            ),
            (
                "rimless-elegant3",
                &[
                    "elegant rimless eyeglasses product",
                    "sophisticated frameless glasses white background",
                    "refined rimless glasses isolated",
                ],
            ),
            (
                "browline-statement3",
                &[
                    "statement browline glasses product",
                    "bold browline eyeglasses white background",
                    "thick browline glasses isolated",
                ],
            ),
            (
                "detailed-temple3",
                &[
                    "decorative temple eyeglasses product",
                    "ornate glasses frame white background",
                    "detailed temple glasses isolated",
                ],
            ),
        ],
    ),
    (
        "triangle",
        &[
            (
                "cat-eye-uplifting3",
                &[
                    "uplifting cat eye glasses product",
                    "wide top cat eye eyeglasses white background",
                    "balancing cat eye glasses isolated",
                ],
            ),
            (
                "wide-top3",
                &[
                    "wide top eyeglasses frame product",
                    "broad upper frame glasses white background",
                    "top heavy glasses isolated",
                ],
            ),
            (
                "browline-bold3",
                &[
                    "bold browline eyeglasses product",
                    "thick upper rim glasses white background",
                    "strong browline glasses isolated",
                ],
            ),
            (
                "round-balancing3",
                &[
                    "balancing round eyeglasses product",
                    "upper emphasis round glasses white background",
                    "wide round glasses isolated",
                ],
            ),
            (
                "aviator-classic3",
                &[
                    "classic aviator eyeglasses product",
                    "large aviator glasses white background",
                    "prescription aviator glasses isolated",
                ],
            ),
            (
                "decorative-top3",
                &[
                    "decorative top frame glasses product",
                    "ornate upper rim eyeglasses white background",
                    "embellished top glasses isolated",
                ],
            ),
        ],
    ),
];

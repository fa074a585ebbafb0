/*!
# Functions

Function names include their opening bracket, so there is no space
between the name and the `(`. Names are not case sensitive.

## Numeric

```text
ABS(x)    absolute value
ACS(x)    arc cosine in radians
ASN(x)    arc sine in radians
ATN(x)    arc tangent in radians
COS(x)    cosine of radians
DEG(x)    radians to degrees
EXP(x)    e to the power x
HI(x)     high byte of a 16-bit value, also >x
INT(x)    truncate towards zero
LN(x)     natural logarithm
LO(x)     low byte, also <x
LOG(x)    base 10 logarithm
NOT(x)    bitwise complement of a 32-bit integer
RAD(x)    degrees to radians
RND(1)    random number from 0 up to but not including 1
RND(n)    random integer from 0 up to but not including n
SGN(x)    -1, 0 or 1
SIN(x)    sine of radians
SQR(x)    square root
TAN(x)    tangent of radians
```

Results which are not real numbers, like `SQR(-1)` or `LOG(0)`, are
`ILLEGAL OPERATION`.

## String

```text
ASC(s$)          code of the first character
CHR$(n)          one character string, n from 0 to 255
EVAL(s$)         evaluate a string as an expression
LEFT$(s$,n)      first n characters
LEN(s$)          length
LOWER$(s$)       ASCII lower case
MID$(s$,i,n)     n characters from position i, counting from 1
RIGHT$(s$,n)     last n characters
STR$(x)          number as decimal text
STR$~(x)         number as hexadecimal text
STRING$(n,s$)    s$ repeated n times
TIME$(fmt$)      assembly time formatted with strftime codes
UPPER$(s$)       ASCII upper case
VAL(s$)          leading decimal number in a string, or 0
```

Strings built by `STRING$` must stay shorter than 65536 bytes.

`EVAL` sees the same symbols as the expression around it, so
`EVAL("label"+STR$(n))` looks up a computed name. It may nest up to 32
deep.

*/
